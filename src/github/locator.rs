//! Issue link parsing and identity wrappers.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;
use url::Url;

use super::error::IssueLinkError;

/// Public GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Characters that cannot appear verbatim in a URI path; `/` is kept.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

static ISSUE_LINK: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^https://github\.com/(.+?)/(.+?)/issues/([0-9]+)$"));

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    fn new(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    fn new(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Issue number as it appears in the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, IssueLinkError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IssueLinkError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Validated GitHub API root, e.g. `https://api.github.com` or a test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Parses an API root URL.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::InvalidUrl` when the value is not an absolute
    /// URL with a host.
    pub fn parse(value: &str) -> Result<Self, IssueLinkError> {
        let parsed =
            Url::parse(value).map_err(|error| IssueLinkError::InvalidUrl(error.to_string()))?;
        if parsed.host_str().is_none() {
            return Err(IssueLinkError::InvalidUrl(
                "API base must include a host".to_owned(),
            ));
        }
        Ok(Self(parsed.as_str().trim_end_matches('/').to_owned()))
    }

    /// The API root without a trailing slash.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(GITHUB_API_BASE.to_owned())
    }
}

/// Parsed GitHub issue link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: IssueNumber,
}

impl IssueLocator {
    /// Parses a GitHub issue link of the exact form
    /// `https://github.com/<owner>/<repo>/issues/<number>`.
    ///
    /// Owner and repository are taken as the shortest non-empty runs that
    /// still let the rest of the link match, so
    /// `https://github.com/a/b/c/issues/1` yields owner `a` and repository
    /// `b/c`. No other validation is applied to them.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::NoMatch` when the input does not have the issue
    /// link shape and `InvalidIssueNumber` when the number overflows `u64`.
    pub fn parse(link: &str) -> Result<Self, IssueLinkError> {
        let pattern = ISSUE_LINK
            .as_ref()
            .map_err(|error| IssueLinkError::Configuration {
                message: format!("issue link pattern failed to compile: {error}"),
            })?;

        let no_match = || IssueLinkError::NoMatch {
            link: link.to_owned(),
        };
        let captures = pattern.captures(link).ok_or_else(no_match)?;
        let (Some(owner), Some(repository), Some(number)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(no_match());
        };

        let parsed_number = number
            .as_str()
            .parse::<u64>()
            .map_err(|_| IssueLinkError::InvalidIssueNumber(number.as_str().to_owned()))?;

        Ok(Self {
            owner: RepositoryOwner::new(owner.as_str()),
            repository: RepositoryName::new(repository.as_str()),
            number: IssueNumber(parsed_number),
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    /// Canonical public API endpoint for the issue.
    #[must_use]
    pub fn api_url(&self) -> String {
        self.api_url_for(&ApiBase::default())
    }

    /// API endpoint for the issue under the given API root.
    #[must_use]
    pub fn api_url_for(&self, api_base: &ApiBase) -> String {
        format!("{}{}", api_base.as_str(), self.issue_path())
    }

    /// Issue endpoint path relative to an API root.
    ///
    /// Owner and repository are percent-encoded where a URI path could not
    /// carry them verbatim.
    pub(crate) fn issue_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}",
            utf8_percent_encode(self.owner.as_str(), PATH),
            utf8_percent_encode(self.repository.as_str(), PATH),
            self.number.get()
        )
    }

    pub(crate) fn comments_path(&self) -> String {
        format!("{}/comments", self.issue_path())
    }
}
