//! Up/down votes on items and their tally.

use crate::domain::foundation::{ItemId, Timestamp, ValidationError};
use crate::domain::list::Item;
use crate::domain::sharing::VoterId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteType {
    Up,
    Down,
}

impl FromStr for VoteType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(VoteType::Up),
            "down" => Ok(VoteType::Down),
            other => Err(ValidationError::invalid_format(
                "voteType",
                format!("expected 'up' or 'down', got '{}'", other),
            )),
        }
    }
}

/// One voter's opinion on one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub item_id: ItemId,
    pub voter_id: VoterId,
    pub vote_type: VoteType,
    pub cast_at: Timestamp,
}

/// What [`apply_vote`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChange {
    Cast,
    Replaced,
    Retracted,
    Removed,
    Unchanged,
}

/// Applies a vote request, keeping at most one vote per (item, voter).
///
/// - no prior vote + type: insert
/// - prior vote of the other type: replace
/// - prior vote of the same type: retract
/// - no type: remove any prior vote
pub fn apply_vote(
    votes: &mut Vec<Vote>,
    item_id: &ItemId,
    voter_id: &VoterId,
    vote_type: Option<VoteType>,
) -> VoteChange {
    let existing = votes
        .iter()
        .position(|v| &v.item_id == item_id && &v.voter_id == voter_id);

    match (existing, vote_type) {
        (None, None) => VoteChange::Unchanged,
        (Some(idx), None) => {
            votes.remove(idx);
            VoteChange::Removed
        }
        (Some(idx), Some(t)) if votes[idx].vote_type == t => {
            votes.remove(idx);
            VoteChange::Retracted
        }
        (Some(idx), Some(t)) => {
            votes[idx].vote_type = t;
            votes[idx].cast_at = Timestamp::now();
            VoteChange::Replaced
        }
        (None, Some(t)) => {
            votes.push(Vote {
                item_id: item_id.clone(),
                voter_id: voter_id.clone(),
                vote_type: t,
                cast_at: Timestamp::now(),
            });
            VoteChange::Cast
        }
    }
}

/// Up and down counts for one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteCount {
    pub up: u32,
    pub down: u32,
}

/// Counts votes per item. Every item appears, including those with no votes.
pub fn tally(items: &[Item], votes: &[Vote]) -> BTreeMap<ItemId, VoteCount> {
    let mut counts: BTreeMap<ItemId, VoteCount> = items
        .iter()
        .map(|item| (item.id().clone(), VoteCount::default()))
        .collect();

    for vote in votes {
        if let Some(count) = counts.get_mut(&vote.item_id) {
            match vote.vote_type {
                VoteType::Up => count.up += 1,
                VoteType::Down => count.down += 1,
            }
        }
    }
    counts
}
