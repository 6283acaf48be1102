//! Session validation port.
//!
//! Tokens are minted by an external credential provider. This port only
//! answers "who does this bearer token belong to". Implementations exist
//! for HS256 JWTs and for tests.
//!
//! # Contract
//!
//! Implementations must check the signature and expiry, and the issuer
//! and audience when configured.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a bearer token and return the authenticated user.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token (without "Bearer " prefix)
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidToken` - malformed or bad signature
    /// * `AuthError::TokenExpired` - signature valid but expired
    /// * `AuthError::ServiceUnavailable` - provider unreachable
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
