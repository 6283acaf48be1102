//! Follow-up reminders and the append-only decision timeline.

use crate::domain::foundation::{Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum length of a timeline event tag.
pub const MAX_EVENT_TAG_LENGTH: usize = 64;

/// Maximum length of reminder and timeline notes.
pub const MAX_NOTE_LENGTH: usize = 1000;

/// Timeline tags recorded by the list itself.
pub mod events {
    pub const FINALIZED: &str = "finalized";
    pub const REOPENED: &str = "reopened";
    pub const REMINDER_SET: &str = "reminder_set";
    pub const REMINDER_CLEARED: &str = "reminder_cleared";
}

/// When the owner wants to revisit a decision.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reminder {
    pub enabled: bool,
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub note: String,
}

impl Reminder {
    /// Builds a reminder. An enabled reminder must have a date.
    pub fn new(
        enabled: bool,
        date: Option<Timestamp>,
        note: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if enabled && date.is_none() {
            return Err(ValidationError::empty_field("reminder.date"));
        }
        Ok(Self {
            enabled,
            date,
            note: validate_note("reminder.note", note.into())?,
        })
    }

    /// Returns true if the reminder fires strictly after `instant`.
    pub fn is_due_after(&self, instant: &Timestamp) -> bool {
        self.enabled && self.date.as_ref().is_some_and(|d| d.is_after(instant))
    }
}

/// One entry in a list's decision history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub event: String,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub note: String,
}

impl TimelineEvent {
    /// Records an event now. Tags are trimmed and must be non-blank.
    pub fn new(event: impl Into<String>, note: impl Into<String>) -> Result<Self, ValidationError> {
        let event = event.into().trim().to_string();
        if event.is_empty() {
            return Err(ValidationError::empty_field("event"));
        }
        if event.chars().count() > MAX_EVENT_TAG_LENGTH {
            return Err(ValidationError::invalid_format(
                "event",
                format!("must be {} characters or less", MAX_EVENT_TAG_LENGTH),
            ));
        }
        Ok(Self {
            event,
            timestamp: Timestamp::now(),
            note: validate_note("note", note.into())?,
        })
    }

    /// Events produced by the list itself with fixed, known-valid tags.
    pub(crate) fn system(event: &'static str, note: impl Into<String>) -> Self {
        Self {
            event: event.to_string(),
            timestamp: Timestamp::now(),
            note: note.into(),
        }
    }
}

fn validate_note(field: &str, note: String) -> Result<String, ValidationError> {
    if note.chars().count() > MAX_NOTE_LENGTH {
        return Err(ValidationError::invalid_format(
            field,
            format!("must be {} characters or less", MAX_NOTE_LENGTH),
        ));
    }
    Ok(note)
}
