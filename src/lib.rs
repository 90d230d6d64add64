//! Issuelink library crate for resolving GitHub issue links.
//!
//! The library parses issue links, looks the issue up through Octocrab
//! without credentials, and maps the response into typed records. It also
//! provides a small request pipeline whose authorization interceptor forwards
//! requests untouched unless a bearer policy is configured.

pub mod config;
pub mod github;
pub mod pipeline;

pub use config::{IssueLinkConfig, OperationMode};
pub use github::{
    Issue, IssueComment, IssueCommentGateway, IssueGateway, IssueLinkError, IssueLocator,
    IssueLookup, OctocrabIssueCommentGateway, OctocrabIssueGateway, PersonalAccessToken,
};
pub use pipeline::{
    AuthorizationPolicy, DEFAULT_TIMEOUT, HttpEvent, HttpHandler, Interceptor, InterceptorChain,
    ReqwestHandler, TokenInterceptor,
};
