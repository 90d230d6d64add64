//! Octocrab implementation of the issue comment gateway.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;

use crate::github::error::IssueLinkError;
use crate::github::locator::{ApiBase, IssueLocator, PersonalAccessToken};
use crate::github::models::{ApiIssueComment, IssueComment};

use super::IssueCommentGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

#[derive(Debug, Serialize)]
struct CreateCommentRequest<'a> {
    body: &'a str,
}

/// Octocrab-backed gateway for posting issue comments.
pub struct OctocrabIssueCommentGateway {
    client: Octocrab,
}

impl OctocrabIssueCommentGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway authenticated with the given token.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::InvalidUrl` when the base URI cannot be parsed or
    /// `IssueLinkError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &ApiBase,
    ) -> Result<Self, IssueLinkError> {
        build_octocrab_client(api_base, Some(token)).map(Self::new)
    }
}

#[async_trait]
impl IssueCommentGateway for OctocrabIssueCommentGateway {
    async fn create_comment(
        &self,
        locator: &IssueLocator,
        body: &str,
    ) -> Result<IssueComment, IssueLinkError> {
        if body.trim().is_empty() {
            return Err(IssueLinkError::EmptyComment);
        }

        let request = CreateCommentRequest { body };
        self.client
            .post::<_, ApiIssueComment>(locator.comments_path(), Some(&request))
            .await
            .map(ApiIssueComment::into)
            .map_err(|error| map_octocrab_error("create issue comment", &error))
    }
}
