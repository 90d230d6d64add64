//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.issuelink.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ISSUELINK_LINK`, `ISSUELINK_TOKEN`, or
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--link`/`-l`, `--token`/`-t`, ...
//!
//! `timeout_seconds` and `attach_authorization` only affect `--raw`, which
//! goes through the request pipeline instead of Octocrab.
//!
//! # Configuration File
//!
//! ```toml
//! link = "https://github.com/octocat/Hello-World/issues/1"
//! api_base = "https://api.github.com"
//! token = "ghp_example"
//! timeout_seconds = 20
//! attach_authorization = false
//! ```

use std::env;
use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::IssueLinkError;
use crate::github::locator::{ApiBase, GITHUB_API_BASE, PersonalAccessToken};
use crate::pipeline::{
    AuthorizationPolicy, DEFAULT_TIMEOUT, InterceptorChain, ReqwestHandler, TokenInterceptor,
};

/// What the CLI should do with the configured link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the issue summary.
    Lookup,
    /// Only report whether the link resolves.
    Validate,
    /// Print the issue JSON fetched through the request pipeline.
    Raw,
    /// Post a comment on the issue.
    Comment,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use issuelink::IssueLinkConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = IssueLinkConfig::load().expect("failed to load configuration");
/// let link = config.require_link().expect("issue link required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ISSUELINK",
    discovery(
        dotfile_name = ".issuelink.toml",
        config_file_name = "issuelink.toml",
        app_name = "issuelink"
    )
)]
pub struct IssueLinkConfig {
    /// GitHub issue link to resolve.
    ///
    /// Can be provided via:
    /// - CLI: `--link <URL>` or `-l <URL>`
    /// - Environment: `ISSUELINK_LINK`
    /// - Config file: `link = "..."`
    #[ortho_config(cli_short = 'l')]
    pub link: Option<String>,

    /// Personal access token, only needed for posting comments.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `ISSUELINK_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Root of the GitHub REST API.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: String,

    /// Only report whether the link resolves to an issue.
    #[ortho_config(cli_short = 'v')]
    pub validate: bool,

    /// Print the raw issue JSON instead of a summary.
    ///
    /// The request goes through the interceptor chain, so it honours
    /// `timeout_seconds` and `attach_authorization`.
    #[ortho_config(cli_short = 'r')]
    pub raw: bool,

    /// Comment to post on the issue.
    #[ortho_config(cli_short = 'c')]
    pub comment: Option<String>,

    /// Attach the token as a bearer header on pipeline requests.
    ///
    /// Off by default. Octocrab lookups never send credentials.
    #[ortho_config()]
    pub attach_authorization: bool,

    /// Timeout for pipeline requests, in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,
}

impl Default for IssueLinkConfig {
    fn default() -> Self {
        Self {
            link: None,
            token: None,
            api_base: GITHUB_API_BASE.to_owned(),
            validate: false,
            raw: false,
            comment: None,
            attach_authorization: false,
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl IssueLinkConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values are skipped, so a blank `token` still falls back to
    /// `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLinkError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, IssueLinkError> {
        self.token
            .as_deref()
            .and_then(|value| PersonalAccessToken::new(value).ok())
            .or_else(|| {
                env::var("GITHUB_TOKEN")
                    .ok()
                    .and_then(|value| PersonalAccessToken::new(value).ok())
            })
            .ok_or(IssueLinkError::MissingToken)
    }

    /// Returns the issue link or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLinkError::MissingLink`] when no link is configured.
    pub fn require_link(&self) -> Result<&str, IssueLinkError> {
        self.link.as_deref().ok_or(IssueLinkError::MissingLink)
    }

    /// Parses the configured API root.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLinkError::InvalidUrl`] when `api_base` is not a URL.
    pub fn api_base(&self) -> Result<ApiBase, IssueLinkError> {
        ApiBase::parse(&self.api_base)
    }

    /// Timeout for pipeline requests.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Determines the operation mode.
    ///
    /// A comment takes precedence over validation, validation over raw
    /// output; otherwise the issue is looked up and summarised.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.comment.is_some() {
            OperationMode::Comment
        } else if self.validate {
            OperationMode::Validate
        } else if self.raw {
            OperationMode::Raw
        } else {
            OperationMode::Lookup
        }
    }

    /// Builds the authorization interceptor described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLinkError::MissingToken`] when `attach_authorization` is
    /// set but no token is available.
    pub fn token_interceptor(&self) -> Result<TokenInterceptor, IssueLinkError> {
        if !self.attach_authorization {
            return Ok(TokenInterceptor::new(AuthorizationPolicy::Disabled));
        }
        let token = self.resolve_token()?;
        Ok(TokenInterceptor::bearer(Arc::new(token)))
    }

    /// Builds the request pipeline: the configured authorization interceptor
    /// in front of a transport bounded by `timeout_seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLinkError::MissingToken`] when `attach_authorization` is
    /// set without a token, or [`IssueLinkError::Configuration`] when the
    /// HTTP client cannot be built.
    pub fn pipeline(&self) -> Result<InterceptorChain, IssueLinkError> {
        let interceptor = self.token_interceptor()?;
        let transport = ReqwestHandler::with_timeout(self.timeout())?;
        Ok(InterceptorChain::new(Arc::new(transport)).with(Arc::new(interceptor)))
    }
}

#[cfg(test)]
mod tests;
