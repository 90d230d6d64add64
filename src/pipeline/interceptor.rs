//! Authorization interceptor.

use std::fmt;
use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use http::HeaderValue;
use http::header::AUTHORIZATION;

use crate::github::{IssueLinkError, PersonalAccessToken};

use super::{EventStream, HttpEvent, HttpHandler, Interceptor, OutboundRequest};

/// Source of bearer tokens.
pub trait TokenProvider: Send + Sync {
    /// Current token, if the user is signed in.
    fn token(&self) -> Option<String>;
}

impl TokenProvider for PersonalAccessToken {
    fn token(&self) -> Option<String> {
        Some(self.value().to_owned())
    }
}

/// Whether [`TokenInterceptor`] attaches credentials.
#[derive(Clone, Default)]
pub enum AuthorizationPolicy {
    /// Requests are forwarded untouched.
    #[default]
    Disabled,
    /// `Authorization: Bearer <token>` is set from the provider.
    Bearer(Arc<dyn TokenProvider>),
}

impl fmt::Debug for AuthorizationPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => formatter.write_str("Disabled"),
            Self::Bearer(_) => formatter.write_str("Bearer(..)"),
        }
    }
}

/// Interceptor reserved for attaching an `Authorization` header.
///
/// With the default [`AuthorizationPolicy::Disabled`] it is a pure
/// pass-through: `next` is called once with the original request and its
/// stream is returned as is.
#[derive(Debug, Clone, Default)]
pub struct TokenInterceptor {
    policy: AuthorizationPolicy,
}

impl TokenInterceptor {
    /// Creates an interceptor with an explicit policy.
    #[must_use]
    pub const fn new(policy: AuthorizationPolicy) -> Self {
        Self { policy }
    }

    /// Pass-through interceptor.
    #[must_use]
    pub const fn passthrough() -> Self {
        Self::new(AuthorizationPolicy::Disabled)
    }

    /// Interceptor that attaches bearer tokens from `provider`.
    #[must_use]
    pub fn bearer(provider: Arc<dyn TokenProvider>) -> Self {
        Self::new(AuthorizationPolicy::Bearer(provider))
    }

    /// The configured policy.
    #[must_use]
    pub const fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }
}

impl Interceptor for TokenInterceptor {
    fn intercept(&self, request: OutboundRequest, next: &dyn HttpHandler) -> EventStream {
        match &self.policy {
            AuthorizationPolicy::Disabled => next.handle(request),
            AuthorizationPolicy::Bearer(provider) => {
                match authorize(request, provider.as_ref()) {
                    Ok(authorized) => next.handle(authorized),
                    Err(error) => stream::once(async move { Err::<HttpEvent, _>(error) }).boxed(),
                }
            }
        }
    }
}

fn authorize(
    mut request: OutboundRequest,
    provider: &dyn TokenProvider,
) -> Result<OutboundRequest, IssueLinkError> {
    let Some(token) = provider.token() else {
        return Ok(request);
    };

    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|error| {
        IssueLinkError::Configuration {
            message: format!("token cannot be sent as a header: {error}"),
        }
    })?;
    value.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, value);
    tracing::trace!("attached bearer token to {} {}", request.method(), request.uri());
    Ok(request)
}
