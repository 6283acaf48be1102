//! Caller identity, resolved once per request against the target list.

use crate::domain::foundation::{AuthenticatedUser, UserId};
use std::fmt;

/// Network origin of a request, as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientOrigin(String);

impl ClientOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    /// Origin used when the transport could not determine one.
    pub fn unknown() -> Self {
        Self("unknown".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who is acting on a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerIdentity {
    /// The list owner.
    Owner(AuthenticatedUser),

    /// Signed in, but not the owner.
    Authenticated(AuthenticatedUser),

    /// No credentials; known only by network origin.
    Anonymous(ClientOrigin),
}

impl CallerIdentity {
    /// Classifies the caller relative to the list owner.
    pub fn resolve(
        user: Option<AuthenticatedUser>,
        origin: ClientOrigin,
        list_owner: &UserId,
    ) -> Self {
        match user {
            Some(user) if &user.id == list_owner => CallerIdentity::Owner(user),
            Some(user) => CallerIdentity::Authenticated(user),
            None => CallerIdentity::Anonymous(origin),
        }
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, CallerIdentity::Owner(_))
    }

    /// Account behind the caller, if signed in.
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            CallerIdentity::Owner(user) | CallerIdentity::Authenticated(user) => Some(user),
            CallerIdentity::Anonymous(_) => None,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user().map(|u| &u.id)
    }
}
