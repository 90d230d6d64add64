//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::IssueLinkError;
use crate::github::locator::{ApiBase, PersonalAccessToken};

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client rooted at the given API base.
///
/// Without a token the client sends no `Authorization` header, which is how
/// issue lookups talk to the public API.
///
/// # Errors
///
/// Returns `IssueLinkError::InvalidUrl` when the base URI cannot be parsed or
/// `IssueLinkError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    api_base: &ApiBase,
    token: Option<&PersonalAccessToken>,
) -> Result<Octocrab, IssueLinkError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| IssueLinkError::InvalidUrl(error.to_string()))?;

    let builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| IssueLinkError::Api {
            message: format!("build client failed: {error}"),
        })?;

    if let Some(token) = token {
        return builder
            .personal_token(token.value().to_owned())
            .build()
            .map_err(|error| map_octocrab_error("build client", &error));
    }

    builder
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
