//! Application handlers.
//!
//! One command or query handler per operation. Writers go through
//! [`modify_list`] so concurrent edits of the same document are retried
//! instead of lost.

pub mod collaboration;
pub mod list;
mod modify;
pub mod sharing;

pub use modify::{modify_list, MAX_WRITE_ATTEMPTS};
