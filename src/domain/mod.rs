//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors, traits)
//! - `list` - DecisionList aggregate, items, lifecycle and timeline
//! - `scoring` - Weighted pro/con score of an item sequence
//! - `sharing` - Share tokens, caller identity, voter ids, permissions
//! - `collaboration` - Comments, votes and vote tallies

pub mod collaboration;
pub mod foundation;
pub mod list;
pub mod scoring;
pub mod sharing;
