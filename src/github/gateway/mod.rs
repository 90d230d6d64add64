//! Gateways for talking to the GitHub issues API through Octocrab.
//!
//! The traits are the seams the lookup facade and the CLI depend on; tests
//! replace them with mocks while the Octocrab implementations perform the
//! real HTTP calls.

mod client;
mod comments;
mod error_mapping;
mod issue;

pub use comments::OctocrabIssueCommentGateway;
pub use issue::OctocrabIssueGateway;

use async_trait::async_trait;

use crate::github::error::IssueLinkError;
use crate::github::locator::IssueLocator;
use crate::github::models::{Issue, IssueComment};

/// Gateway that can load a single issue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch the issue the locator points at.
    async fn issue(&self, locator: &IssueLocator) -> Result<Issue, IssueLinkError>;
}

/// Gateway that can post comments on an issue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueCommentGateway: Send + Sync {
    /// Create a comment with the given Markdown body.
    async fn create_comment(
        &self,
        locator: &IssueLocator,
        body: &str,
    ) -> Result<IssueComment, IssueLinkError>;
}
