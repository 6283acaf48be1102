//! List lifecycle status and decision outcome.

use crate::domain::foundation::{StateMachine, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a decision list.
///
/// A finalized list is a record of a decision that was made: its content
/// is locked until the owner reopens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    /// Being edited. Initial state.
    #[default]
    Draft,

    /// Decision recorded, content locked.
    Finalized,
}

impl ListStatus {
    /// Returns true if content edits are allowed in this state.
    pub fn is_editable(&self) -> bool {
        matches!(self, ListStatus::Draft)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListStatus::Draft => "draft",
            ListStatus::Finalized => "finalized",
        }
    }
}

impl StateMachine for ListStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ListStatus::*;
        matches!((self, target), (Draft, Finalized) | (Finalized, Draft))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ListStatus::*;
        match self {
            Draft => vec![Finalized],
            Finalized => vec![Draft],
        }
    }
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ListStatus::Draft),
            "finalized" => Ok(ListStatus::Finalized),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("expected 'draft' or 'finalized', got '{}'", other),
            )),
        }
    }
}

/// The decision the owner recorded for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Yes,
    No,
    #[default]
    Undecided,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Yes => "yes",
            Outcome::No => "no",
            Outcome::Undecided => "undecided",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Outcome::Yes),
            "no" => Ok(Outcome::No),
            "undecided" => Ok(Outcome::Undecided),
            other => Err(ValidationError::invalid_format(
                "outcome",
                format!("expected 'yes', 'no' or 'undecided', got '{}'", other),
            )),
        }
    }
}
