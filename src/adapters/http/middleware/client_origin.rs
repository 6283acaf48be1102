//! Client origin resolution.
//!
//! Anonymous voter ids are keyed on where a request came from. The
//! middleware resolves that once per request and stores a [`ClientOrigin`]
//! in the extensions; handlers read it back with [`Origin`].
//!
//! Forwarded headers are only honoured when the deployment says a trusted
//! proxy sits in front; otherwise any client could pick its own origin.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::sharing::ClientOrigin;

/// Whether X-Forwarded-For / X-Real-IP may be believed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginPolicy {
    pub trust_forwarded_headers: bool,
}

impl OriginPolicy {
    pub fn new(trust_forwarded_headers: bool) -> Self {
        Self {
            trust_forwarded_headers,
        }
    }
}

/// Resolves the client origin and injects it into request extensions.
pub async fn client_origin_middleware(
    State(policy): State<OriginPolicy>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    mut request: Request,
    next: Next,
) -> Response {
    let origin = extract_client_origin(&request, connect_info.as_ref(), policy)
        .map(ClientOrigin::new)
        .unwrap_or_else(ClientOrigin::unknown);
    request.extensions_mut().insert(origin);
    next.run(request).await
}

/// Order of precedence when forwarded headers are trusted:
/// 1. X-Forwarded-For header (first address in the list)
/// 2. X-Real-IP header
/// 3. ConnectInfo socket address
fn extract_client_origin<B>(
    request: &axum::http::Request<B>,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
    policy: OriginPolicy,
) -> Option<String> {
    if policy.trust_forwarded_headers {
        let forwarded = request
            .headers()
            .get("X-Forwarded-For")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());
        if let Some(first_hop) = forwarded {
            return Some(first_hop.to_string());
        }

        let real_ip = request
            .headers()
            .get("X-Real-IP")
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());
        if let Some(real_ip) = real_ip {
            return Some(real_ip.to_string());
        }
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

/// Extractor for the resolved client origin.
///
/// Falls back to [`ClientOrigin::unknown`] when the middleware did not run.
#[derive(Debug, Clone)]
pub struct Origin(pub ClientOrigin);

impl<S> axum::extract::FromRequestParts<S> for Origin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let origin = parts
                .extensions
                .get::<ClientOrigin>()
                .cloned()
                .unwrap_or_else(ClientOrigin::unknown);
            Ok(Origin(origin))
        })
    }
}
