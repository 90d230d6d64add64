//! Client-side HTTP request pipeline.
//!
//! An outbound request travels through an ordered list of [`Interceptor`]s
//! before reaching a terminal [`HttpHandler`] that performs the transport.
//! Every stage hands back an [`EventStream`] describing what happened to the
//! request; interceptors may rewrite the request on the way in and are
//! expected to return the downstream stream unless they have a reason not to.

mod interceptor;
mod request;
mod transport;

pub use interceptor::{AuthorizationPolicy, TokenInterceptor, TokenProvider};
pub use request::{issue_request, send};
pub use transport::{DEFAULT_TIMEOUT, ReqwestHandler};

use std::sync::Arc;

use futures::stream::BoxStream;

use crate::github::IssueLinkError;

/// Request as it leaves the client.
pub type OutboundRequest = http::Request<Vec<u8>>;

/// Fully buffered response.
pub type InboundResponse = http::Response<Vec<u8>>;

/// Progress notification for a single request.
#[derive(Debug)]
pub enum HttpEvent {
    /// The request has been handed to the transport.
    Sent,
    /// The final response arrived.
    Response(InboundResponse),
}

/// Stream of events produced for one request.
pub type EventStream = BoxStream<'static, Result<HttpEvent, IssueLinkError>>;

/// A stage that turns a request into an event stream.
#[cfg_attr(test, mockall::automock)]
pub trait HttpHandler: Send + Sync {
    /// Dispatch the request.
    fn handle(&self, request: OutboundRequest) -> EventStream;
}

/// A middleware stage that sits in front of the next handler.
pub trait Interceptor: Send + Sync {
    /// Inspect or rewrite `request`, then usually forward it to `next`.
    fn intercept(&self, request: OutboundRequest, next: &dyn HttpHandler) -> EventStream;
}

/// Ordered interceptors in front of a terminal handler.
///
/// The chain is itself an [`HttpHandler`], so chains nest.
#[derive(Clone)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
    backend: Arc<dyn HttpHandler>,
}

impl InterceptorChain {
    /// A chain with no interceptors that forwards straight to `backend`.
    #[must_use]
    pub const fn new(backend: Arc<dyn HttpHandler>) -> Self {
        Self {
            interceptors: Vec::new(),
            backend,
        }
    }

    /// Appends an interceptor; it runs after the ones already added.
    #[must_use]
    pub fn with(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Number of interceptors in front of the backend.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether requests go straight to the backend.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl HttpHandler for InterceptorChain {
    fn handle(&self, request: OutboundRequest) -> EventStream {
        Next {
            interceptors: &self.interceptors,
            backend: self.backend.as_ref(),
        }
        .handle(request)
    }
}

/// The remainder of a chain as seen by one interceptor.
struct Next<'chain> {
    interceptors: &'chain [Arc<dyn Interceptor>],
    backend: &'chain dyn HttpHandler,
}

impl HttpHandler for Next<'_> {
    fn handle(&self, request: OutboundRequest) -> EventStream {
        match self.interceptors.split_first() {
            Some((current, rest)) => current.intercept(
                request,
                &Next {
                    interceptors: rest,
                    backend: self.backend,
                },
            ),
            None => self.backend.handle(request),
        }
    }
}
