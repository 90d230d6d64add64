//! GitHub issue link parsing, lookup, and commenting.
//!
//! Links of the form `https://github.com/<owner>/<repo>/issues/<number>` are
//! parsed into a locator, resolved against the public REST API without
//! credentials, and mapped into typed issue records. Errors are mapped into
//! a small set of variants so callers can either inspect the failure or
//! collapse it into "no issue".

pub mod error;
pub mod gateway;
pub mod locator;
pub mod lookup;
pub mod models;

pub use error::IssueLinkError;
pub use gateway::{
    IssueCommentGateway, IssueGateway, OctocrabIssueCommentGateway, OctocrabIssueGateway,
};
pub use locator::{
    ApiBase, GITHUB_API_BASE, IssueLocator, IssueNumber, PersonalAccessToken, RepositoryName,
    RepositoryOwner,
};
pub use lookup::IssueLookup;
pub use models::{Account, AccountLinks, Issue, IssueComment, IssueState, Label, Milestone};

#[cfg(test)]
pub use gateway::MockIssueGateway;

#[cfg(test)]
mod tests;
