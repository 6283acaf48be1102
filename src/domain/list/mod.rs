//! Decision list domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - DecisionList aggregate and its edit inputs
//! - `item` - Pro/con items and weights
//! - `status` - Draft/finalized lifecycle and recorded outcome
//! - `reminder` - Follow-up reminders and the decision timeline
//! - `errors` - ListError and its code mapping

mod aggregate;
mod errors;
mod item;
mod reminder;
mod status;

pub use aggregate::{DecisionList, ListUpdate, NewList, COPY_SUFFIX, MAX_TEXT_LENGTH, MAX_TITLE_LENGTH};
pub use errors::{ListError, PUBLIC_NOT_FOUND_MESSAGE};
pub use item::{validate_items, Item, ItemInput, ItemKind, Weight, MAX_ITEM_TITLE_LENGTH};
pub use reminder::{events, Reminder, TimelineEvent};
pub use status::{ListStatus, Outcome};

#[cfg(test)]
pub(crate) use item::test_support;
