//! Data models representing GitHub issues and the accounts attached to them.
//!
//! Types prefixed with `Api` are internal deserialisation targets. They spell
//! out which fields the API must provide and which may be absent, and are then
//! mapped field-by-field into the public domain types. A payload missing a
//! required field fails to decode instead of producing a half-filled record.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// GitHub user or organisation account as embedded in issue payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    /// Login name.
    pub login: String,
    /// Numeric account identifier.
    pub id: u64,
    /// GraphQL node identifier.
    pub node_id: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Gravatar identifier (often empty).
    pub gravatar_id: Option<String>,
    /// API URL of the account.
    pub url: Option<String>,
    /// Profile page URL.
    pub html_url: Option<String>,
    /// Related API resource URLs.
    pub links: AccountLinks,
    /// Account type, e.g. `User`, `Organization` or `Bot`.
    pub account_type: Option<String>,
    /// Whether the account is a GitHub site administrator.
    pub site_admin: bool,
}

/// API resource URLs advertised for an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountLinks {
    /// Followers listing.
    pub followers_url: Option<String>,
    /// Following listing (URI template).
    pub following_url: Option<String>,
    /// Gists listing (URI template).
    pub gists_url: Option<String>,
    /// Starred repositories (URI template).
    pub starred_url: Option<String>,
    /// Watched repositories.
    pub subscriptions_url: Option<String>,
    /// Organisation memberships.
    pub organizations_url: Option<String>,
    /// Repositories.
    pub repos_url: Option<String>,
    /// Public events (URI template).
    pub events_url: Option<String>,
    /// Received events.
    pub received_events_url: Option<String>,
}

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue has been closed.
    Closed,
}

impl IssueState {
    /// The state as GitHub spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Label attached to an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Hex colour without the leading `#`.
    pub color: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

/// Milestone an issue is scheduled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Milestone number within the repository.
    pub number: u64,
    /// Milestone title.
    pub title: String,
    /// Milestone state (`open` or `closed`).
    pub state: Option<String>,
}

/// GitHub issue snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// API URL of the issue.
    pub url: Option<String>,
    /// API URL of the owning repository.
    pub repository_url: Option<String>,
    /// Labels endpoint (URI template).
    pub labels_url: Option<String>,
    /// Comments endpoint.
    pub comments_url: Option<String>,
    /// Events endpoint.
    pub events_url: Option<String>,
    /// Web page for the issue.
    pub html_url: Option<String>,
    /// Numeric issue identifier, unique across GitHub.
    pub id: u64,
    /// Issue number within the repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Account that opened the issue.
    pub user: Account,
    /// Attached labels.
    pub labels: Vec<Label>,
    /// Lifecycle state.
    pub state: IssueState,
    /// Whether the conversation is locked.
    pub locked: bool,
    /// Primary assignee.
    pub assignee: Option<Account>,
    /// All assignees.
    pub assignees: Vec<Account>,
    /// Milestone, if any.
    pub milestone: Option<Milestone>,
    /// Number of comments.
    pub comments: u64,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Close time.
    pub closed_at: Option<DateTime<Utc>>,
    /// Relationship of the author to the repository, e.g. `OWNER`.
    pub author_association: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Account that closed the issue.
    pub closed_by: Option<Account>,
}

/// Comment created on an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    /// Comment identifier.
    pub id: u64,
    /// Comment body as stored by GitHub.
    pub body: Option<String>,
    /// Web page for the comment.
    pub html_url: Option<String>,
    /// Comment author.
    pub author: Option<Account>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: String,
    pub(super) id: u64,
    pub(super) node_id: Option<String>,
    pub(super) avatar_url: Option<String>,
    pub(super) gravatar_id: Option<String>,
    pub(super) url: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) followers_url: Option<String>,
    pub(super) following_url: Option<String>,
    pub(super) gists_url: Option<String>,
    pub(super) starred_url: Option<String>,
    pub(super) subscriptions_url: Option<String>,
    pub(super) organizations_url: Option<String>,
    pub(super) repos_url: Option<String>,
    pub(super) events_url: Option<String>,
    pub(super) received_events_url: Option<String>,
    #[serde(rename = "type")]
    pub(super) account_type: Option<String>,
    pub(super) site_admin: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum ApiIssueState {
    Open,
    Closed,
}

/// Labels arrive as objects from the REST API; older payloads use bare names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum ApiLabel {
    Name(String),
    Detailed {
        name: String,
        color: Option<String>,
        description: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiMilestone {
    pub(super) number: u64,
    pub(super) title: String,
    pub(super) state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) url: Option<String>,
    pub(super) repository_url: Option<String>,
    pub(super) labels_url: Option<String>,
    pub(super) comments_url: Option<String>,
    pub(super) events_url: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) id: u64,
    pub(super) number: u64,
    pub(super) title: String,
    pub(super) user: ApiUser,
    pub(super) labels: Option<Vec<ApiLabel>>,
    pub(super) state: ApiIssueState,
    pub(super) locked: Option<bool>,
    pub(super) assignee: Option<ApiUser>,
    pub(super) assignees: Option<Vec<ApiUser>>,
    pub(super) milestone: Option<ApiMilestone>,
    pub(super) comments: Option<u64>,
    pub(super) created_at: Option<DateTime<Utc>>,
    pub(super) updated_at: Option<DateTime<Utc>>,
    pub(super) closed_at: Option<DateTime<Utc>>,
    pub(super) author_association: Option<String>,
    pub(super) body: Option<String>,
    pub(super) closed_by: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssueComment {
    pub(super) id: u64,
    pub(super) body: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) created_at: Option<DateTime<Utc>>,
}

impl From<ApiUser> for Account {
    fn from(value: ApiUser) -> Self {
        Self {
            login: value.login,
            id: value.id,
            node_id: value.node_id,
            avatar_url: value.avatar_url,
            gravatar_id: value.gravatar_id,
            url: value.url,
            html_url: value.html_url,
            links: AccountLinks {
                followers_url: value.followers_url,
                following_url: value.following_url,
                gists_url: value.gists_url,
                starred_url: value.starred_url,
                subscriptions_url: value.subscriptions_url,
                organizations_url: value.organizations_url,
                repos_url: value.repos_url,
                events_url: value.events_url,
                received_events_url: value.received_events_url,
            },
            account_type: value.account_type,
            site_admin: value.site_admin.unwrap_or(false),
        }
    }
}

impl From<ApiIssueState> for IssueState {
    fn from(value: ApiIssueState) -> Self {
        match value {
            ApiIssueState::Open => Self::Open,
            ApiIssueState::Closed => Self::Closed,
        }
    }
}

impl From<ApiLabel> for Label {
    fn from(value: ApiLabel) -> Self {
        match value {
            ApiLabel::Name(name) => Self {
                name,
                color: None,
                description: None,
            },
            ApiLabel::Detailed {
                name,
                color,
                description,
            } => Self {
                name,
                color,
                description,
            },
        }
    }
}

impl From<ApiMilestone> for Milestone {
    fn from(value: ApiMilestone) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
        }
    }
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            url: value.url,
            repository_url: value.repository_url,
            labels_url: value.labels_url,
            comments_url: value.comments_url,
            events_url: value.events_url,
            html_url: value.html_url,
            id: value.id,
            number: value.number,
            title: value.title,
            user: value.user.into(),
            labels: value
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(Label::from)
                .collect(),
            state: value.state.into(),
            locked: value.locked.unwrap_or(false),
            assignee: value.assignee.map(Account::from),
            assignees: value
                .assignees
                .unwrap_or_default()
                .into_iter()
                .map(Account::from)
                .collect(),
            milestone: value.milestone.map(Milestone::from),
            comments: value.comments.unwrap_or(0),
            created_at: value.created_at,
            updated_at: value.updated_at,
            closed_at: value.closed_at,
            author_association: value.author_association,
            body: value.body,
            closed_by: value.closed_by.map(Account::from),
        }
    }
}

impl From<ApiIssueComment> for IssueComment {
    fn from(value: ApiIssueComment) -> Self {
        Self {
            id: value.id,
            body: value.body,
            html_url: value.html_url,
            author: value.user.map(Account::from),
            created_at: value.created_at,
        }
    }
}
