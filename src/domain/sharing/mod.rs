//! Sharing and identity.
//!
//! Share-token minting, caller classification, anonymous voter ids and
//! the permission switches that gate public comments and votes.

mod caller;
mod permissions;
mod token;
mod voter;

pub use caller::{CallerIdentity, ClientOrigin};
pub use permissions::{Interaction, PermissionsUpdate, SharePermissions};
pub use token::{ShareToken, MAX_SHARE_TOKEN_LENGTH};
pub use voter::{VoterId, VoterIdHasher};
