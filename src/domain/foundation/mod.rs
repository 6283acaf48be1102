//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the small traits
//! (ownership, state machine) that the decision-list domain is built on.

mod auth;
mod errors;
mod ids;
mod ownership;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CommentId, ItemId, ListId, UserId, MAX_ITEM_ID_LENGTH};
pub use ownership::OwnedByUser;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
