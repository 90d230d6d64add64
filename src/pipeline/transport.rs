//! Terminal handler that performs requests with `reqwest`.

use std::time::Duration;

use futures::StreamExt;
use futures::stream;
use reqwest::Client;

use crate::github::IssueLinkError;

use super::{EventStream, HttpEvent, HttpHandler, InboundResponse, OutboundRequest};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Sends requests over the network and buffers the response body.
#[derive(Debug, Clone)]
pub struct ReqwestHandler {
    client: Client,
}

impl ReqwestHandler {
    /// Creates a handler from an existing client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a handler whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::Configuration` when the HTTP client cannot be
    /// built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, IssueLinkError> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::new)
            .map_err(|error| IssueLinkError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })
    }

    /// Creates a handler with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `IssueLinkError::Configuration` when the HTTP client cannot be
    /// built.
    pub fn with_default_timeout() -> Result<Self, IssueLinkError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

impl HttpHandler for ReqwestHandler {
    fn handle(&self, request: OutboundRequest) -> EventStream {
        let client = self.client.clone();
        let response = async move { dispatch(&client, request).await.map(HttpEvent::Response) };
        stream::once(async { Ok::<_, IssueLinkError>(HttpEvent::Sent) })
            .chain(stream::once(response))
            .boxed()
    }
}

async fn dispatch(
    client: &Client,
    request: OutboundRequest,
) -> Result<InboundResponse, IssueLinkError> {
    let outgoing = reqwest::Request::try_from(request)
        .map_err(|error| IssueLinkError::InvalidUrl(error.to_string()))?;
    let response = client
        .execute(outgoing)
        .await
        .map_err(|error| IssueLinkError::Network {
            message: format!("request failed: {error}"),
        })?;

    let status = response.status();
    let version = response.version();
    let headers = response.headers().clone();
    let body = response
        .bytes()
        .await
        .map_err(|error| IssueLinkError::Network {
            message: format!("reading response body failed: {error}"),
        })?;

    let mut builder = http::Response::builder().status(status).version(version);
    if let Some(target) = builder.headers_mut() {
        target.extend(headers);
    }
    builder
        .body(body.to_vec())
        .map_err(|error| IssueLinkError::Decode {
            message: format!("response could not be rebuilt: {error}"),
        })
}
