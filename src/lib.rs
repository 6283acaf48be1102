//! Weighwise - Weighted pros/cons decision lists.
//!
//! Owners build weighted pro/con lists, record the decision they made and
//! can share a list publicly so others may comment and vote on its items.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
