//! Collaboration ledger: comments and votes on shared lists.

mod comment;
mod vote;

pub use comment::{
    Comment, ANONYMOUS_AUTHOR, MAX_AUTHOR_NAME_LENGTH, MAX_COMMENT_LENGTH,
};
pub use vote::{apply_vote, tally, Vote, VoteChange, VoteCount, VoteType};
