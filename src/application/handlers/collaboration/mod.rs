//! Comment and vote handlers.

mod add_comment;
mod cast_vote;
mod delete_comment;

pub use add_comment::{AddCommentCommand, AddCommentHandler};
pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use delete_comment::{DeleteCommentCommand, DeleteCommentHandler};
