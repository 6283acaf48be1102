//! Share tokens for public list links.

use crate::domain::foundation::ValidationError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on accepted token length; minted tokens are 64 chars.
pub const MAX_SHARE_TOKEN_LENGTH: usize = 128;

/// Opaque capability granting read access to a public list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareToken(String);

impl ShareToken {
    /// Mints a fresh 256-bit token, hex encoded.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let bytes: [u8; 32] = rng.random();
        Self(hex::encode(bytes))
    }

    /// Accepts a token presented by a client.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        if raw.len() > MAX_SHARE_TOKEN_LENGTH {
            return Err(ValidationError::invalid_format("token", "token too long"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_is_64_hex_chars() {
        let token = ShareToken::generate();
        assert_eq!(token.as_str().len(), 64);
        assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_tokens_differ() {
        assert_ne!(ShareToken::generate(), ShareToken::generate());
    }

    #[test]
    fn parse_rejects_blank_and_oversized() {
        assert!(ShareToken::parse("").is_err());
        assert!(ShareToken::parse("a".repeat(MAX_SHARE_TOKEN_LENGTH + 1)).is_err());
    }

    #[test]
    fn parse_accepts_legacy_short_tokens() {
        assert_eq!(ShareToken::parse("k3j9x0a1b").unwrap().as_str(), "k3j9x0a1b");
    }
}
