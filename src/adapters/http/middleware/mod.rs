//! HTTP middleware for axum.
//!
//! - `auth` - Bearer token validation and user extractors
//! - `client_origin` - client address used for anonymous voter ids

pub mod auth;
pub mod client_origin;

pub use auth::{auth_middleware, AuthRejection, AuthState, OptionalAuth, RequireAuth};
pub use client_origin::{client_origin_middleware, Origin, OriginPolicy};
