//! HTTP adapters - REST API over axum.
//!
//! [`app_router`] assembles the full application: list routes under
//! `/api/lists`, a health probe, and the cross-cutting layers (auth, client
//! origin, tracing, CORS, timeout).

pub mod lists;
pub mod middleware;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use lists::{list_routes, ListsAppState};
pub use middleware::{AuthState, OriginPolicy};

/// Router-level settings taken from `ServerConfig`.
#[derive(Debug, Clone, Default)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
    pub origin_policy: OriginPolicy,
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(parsed)
    }
}

/// Builds the application router.
pub fn app_router(state: ListsAppState, auth: AuthState, settings: &HttpSettings) -> Router {
    let api = Router::new()
        .nest("/api/lists", list_routes())
        .with_state(state)
        .layer(from_fn_with_state(auth, middleware::auth_middleware))
        .layer(from_fn_with_state(
            settings.origin_policy,
            middleware::client_origin_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}
