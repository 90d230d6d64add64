//! Building pipeline requests and draining their event streams.

use futures::StreamExt;
use http::Method;
use http::header::{ACCEPT, USER_AGENT};

use crate::github::{ApiBase, IssueLinkError, IssueLocator};

use super::{HttpEvent, HttpHandler, InboundResponse, OutboundRequest};

const GITHUB_JSON: &str = "application/vnd.github+json";
const AGENT: &str = concat!("issuelink/", env!("CARGO_PKG_VERSION"));

/// GET request for the raw issue JSON under `api_base`.
///
/// # Errors
///
/// Returns `IssueLinkError::InvalidUrl` when the endpoint is not a valid URI.
pub fn issue_request(
    locator: &IssueLocator,
    api_base: &ApiBase,
) -> Result<OutboundRequest, IssueLinkError> {
    http::Request::builder()
        .method(Method::GET)
        .uri(locator.api_url_for(api_base))
        .header(ACCEPT, GITHUB_JSON)
        .header(USER_AGENT, AGENT)
        .body(Vec::new())
        .map_err(|error| IssueLinkError::InvalidUrl(error.to_string()))
}

/// Dispatches `request` and waits for its response.
///
/// The first error in the stream is returned as is.
///
/// # Errors
///
/// Propagates stream errors and returns `IssueLinkError::Network` when the
/// stream ends without a response.
pub async fn send(
    handler: &dyn HttpHandler,
    request: OutboundRequest,
) -> Result<InboundResponse, IssueLinkError> {
    let mut events = handler.handle(request);
    while let Some(event) = events.next().await {
        if let HttpEvent::Response(response) = event? {
            return Ok(response);
        }
    }
    Err(IssueLinkError::Network {
        message: "request ended without a response".to_owned(),
    })
}
