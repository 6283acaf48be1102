//! Sharing configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;

use super::auth::MIN_PRODUCTION_SECRET_BYTES;
use super::error::ValidationError;
use super::server::Environment;

/// Public-sharing settings.
#[derive(Deserialize)]
pub struct SharingConfig {
    /// HMAC key for anonymous voter ids. Rotating it resets anonymous votes.
    pub voter_hash_secret: SecretString,
}

impl SharingConfig {
    pub fn new(voter_hash_secret: impl Into<String>) -> Self {
        Self {
            voter_hash_secret: SecretString::new(voter_hash_secret.into()),
        }
    }

    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        let secret = self.voter_hash_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("SHARING__VOTER_HASH_SECRET"));
        }
        if environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::SecretTooShort(
                "SHARING__VOTER_HASH_SECRET",
                MIN_PRODUCTION_SECRET_BYTES,
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for SharingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharingConfig")
            .field("voter_hash_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_required() {
        assert!(SharingConfig::new("").validate(Environment::Development).is_err());
        assert!(SharingConfig::new("pepper").validate(Environment::Development).is_ok());
    }

    #[test]
    fn production_requires_long_secret() {
        assert!(SharingConfig::new("pepper").validate(Environment::Production).is_err());
        assert!(SharingConfig::new("p".repeat(40))
            .validate(Environment::Production)
            .is_ok());
    }
}
