//! High-level lookup facade turning issue links into issue records.

use super::error::IssueLinkError;
use super::gateway::IssueGateway;
use super::locator::IssueLocator;
use super::models::Issue;

/// Resolves issue links through a gateway.
pub struct IssueLookup<'client, Gateway>
where
    Gateway: IssueGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> IssueLookup<'client, Gateway>
where
    Gateway: IssueGateway,
{
    /// Create a new lookup facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Parse the link and load the issue it points at.
    ///
    /// Links that do not match are rejected before the gateway is called.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::NoMatch` for links of the wrong shape and
    /// propagates gateway failures (network, API status, decoding) unchanged.
    pub async fn fetch(&self, link: &str) -> Result<Issue, IssueLinkError> {
        let locator = IssueLocator::parse(link)?;
        tracing::debug!("looking up issue at {}", locator.api_url());
        self.client.issue(&locator).await
    }

    /// Load the issue for a link, or `None` when the link does not match or
    /// the request fails for any reason.
    pub async fn issue_info(&self, link: &str) -> Option<Issue> {
        match self.fetch(link).await {
            Ok(issue) => Some(issue),
            Err(IssueLinkError::NoMatch { .. }) => {
                tracing::debug!("ignoring non-issue link: {link}");
                None
            }
            Err(error) => {
                tracing::warn!("issue lookup for {link} failed: {error}");
                None
            }
        }
    }

    /// Whether the link resolves to an existing issue.
    pub async fn validate_link(&self, link: &str) -> bool {
        self.issue_info(link).await.is_some()
    }
}
