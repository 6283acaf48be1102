//! Voter identity derivation.
//!
//! Authenticated voters are identified by their account id. Anonymous
//! voters get a keyed hash of (client origin, item id) so the raw network
//! address is never stored. Two people behind one NAT collide, and a
//! client that can forge forwarded headers can vote more than once; both
//! are accepted limits of anonymous voting.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

use crate::domain::foundation::{ItemId, UserId, ValidationError};

use super::ClientOrigin;

type HmacSha256 = Hmac<Sha256>;

/// Separates origin from item id in the hash input.
const FIELD_SEPARATOR: u8 = 0x1f;

/// Stable identity of whoever cast a vote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives voter ids, keyed with a server secret.
#[derive(Clone)]
pub struct VoterIdHasher {
    mac: HmacSha256,
}

impl VoterIdHasher {
    /// Creates a hasher from the configured secret.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the secret is empty.
    pub fn new(secret: &SecretString) -> Result<Self, ValidationError> {
        let key = secret.expose_secret().as_bytes();
        if key.is_empty() {
            return Err(ValidationError::empty_field("voter_hash_secret"));
        }
        let mac = HmacSha256::new_from_slice(key).map_err(|e| {
            ValidationError::invalid_format("voter_hash_secret", e.to_string())
        })?;
        Ok(Self { mac })
    }

    /// Voter id for an anonymous caller voting on `item`.
    pub fn anonymous(&self, origin: &ClientOrigin, item: &ItemId) -> VoterId {
        let mut mac = self.mac.clone();
        mac.update(origin.as_str().as_bytes());
        mac.update(&[FIELD_SEPARATOR]);
        mac.update(item.as_str().as_bytes());
        VoterId(hex::encode(mac.finalize().into_bytes()))
    }

    /// Voter id for a signed-in caller: the account id itself.
    pub fn authenticated(&self, user: &UserId) -> VoterId {
        VoterId(user.as_str().to_string())
    }
}

impl fmt::Debug for VoterIdHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoterIdHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher(secret: &str) -> VoterIdHasher {
        VoterIdHasher::new(&SecretString::new(secret.to_string())).unwrap()
    }

    fn item(id: &str) -> ItemId {
        ItemId::new(id).unwrap()
    }

    #[test]
    fn same_origin_and_item_give_same_id() {
        let h = hasher("server-secret");
        let origin = ClientOrigin::new("203.0.113.7");
        assert_eq!(h.anonymous(&origin, &item("a")), h.anonymous(&origin, &item("a")));
    }

    #[test]
    fn different_items_give_different_ids() {
        let h = hasher("server-secret");
        let origin = ClientOrigin::new("203.0.113.7");
        assert_ne!(h.anonymous(&origin, &item("a")), h.anonymous(&origin, &item("b")));
    }

    #[test]
    fn different_origins_give_different_ids() {
        let h = hasher("server-secret");
        assert_ne!(
            h.anonymous(&ClientOrigin::new("203.0.113.7"), &item("a")),
            h.anonymous(&ClientOrigin::new("203.0.113.8"), &item("a"))
        );
    }

    #[test]
    fn separator_prevents_concatenation_collisions() {
        let h = hasher("server-secret");
        assert_ne!(
            h.anonymous(&ClientOrigin::new("1.2.3.4"), &item("5")),
            h.anonymous(&ClientOrigin::new("1.2.3."), &item("45"))
        );
    }

    #[test]
    fn different_secrets_give_different_ids() {
        let origin = ClientOrigin::new("203.0.113.7");
        assert_ne!(
            hasher("one").anonymous(&origin, &item("a")),
            hasher("two").anonymous(&origin, &item("a"))
        );
    }

    #[test]
    fn anonymous_id_does_not_leak_origin() {
        let id = hasher("server-secret").anonymous(&ClientOrigin::new("203.0.113.7"), &item("a"));
        assert!(!id.as_str().contains("203.0.113.7"));
        assert_eq!(id.as_str().len(), 64);
    }

    #[test]
    fn authenticated_id_is_account_id() {
        let user = UserId::new("user-42").unwrap();
        assert_eq!(hasher("s").authenticated(&user).as_str(), "user-42");
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(VoterIdHasher::new(&SecretString::new(String::new())).is_err());
    }
}
