//! Error types exposed by the issue link layer.

use thiserror::Error;

/// Errors surfaced while parsing issue links or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueLinkError {
    /// No issue link was supplied.
    #[error("issue link is required")]
    MissingLink,

    /// The input does not have the shape of a GitHub issue link.
    #[error("not a GitHub issue link (expected https://github.com/<owner>/<repo>/issues/<number>): {link}")]
    NoMatch {
        /// The rejected input.
        link: String,
    },

    /// The issue number does not fit into an unsigned 64-bit integer.
    #[error("issue number is out of range: {0}")]
    InvalidIssueNumber(String),

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// A comment body was blank.
    #[error("comment body must not be empty")]
    EmptyComment,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-success status.
    #[error("GitHub API error: {message}")]
    Api {
        /// Status and message returned by GitHub.
        message: String,
    },

    /// The transport failed before a response arrived.
    #[error("network error: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body was empty or did not match the expected schema.
    #[error("could not decode GitHub response: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
