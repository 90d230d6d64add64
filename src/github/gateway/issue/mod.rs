//! Octocrab implementation of the issue gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::IssueLinkError;
use crate::github::locator::{ApiBase, IssueLocator};
use crate::github::models::{ApiIssue, Issue};

use super::IssueGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed gateway for unauthenticated issue lookups.
pub struct OctocrabIssueGateway {
    client: Octocrab,
}

impl OctocrabIssueGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway that sends no credentials.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::InvalidUrl` when the base URI cannot be parsed or
    /// `IssueLinkError::Api` when Octocrab fails to construct a client.
    pub fn anonymous(api_base: &ApiBase) -> Result<Self, IssueLinkError> {
        build_octocrab_client(api_base, None).map(Self::new)
    }
}

#[async_trait]
impl IssueGateway for OctocrabIssueGateway {
    async fn issue(&self, locator: &IssueLocator) -> Result<Issue, IssueLinkError> {
        self.client
            .get::<ApiIssue, _, _>(locator.issue_path(), None::<&()>)
            .await
            .map(ApiIssue::into)
            .map_err(|error| map_octocrab_error("issue", &error))
    }
}
