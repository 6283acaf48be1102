//! Owner-controlled switches for public interaction.

use serde::{Deserialize, Serialize};

/// What visitors may do on a public list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePermissions {
    #[serde(default = "enabled")]
    pub allow_comments: bool,
    #[serde(default = "enabled")]
    pub allow_voting: bool,
    #[serde(default)]
    pub require_name: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SharePermissions {
    fn default() -> Self {
        Self {
            allow_comments: true,
            allow_voting: true,
            require_name: false,
        }
    }
}

impl SharePermissions {
    /// Applies a partial update; absent fields keep their value.
    pub fn apply(&mut self, update: PermissionsUpdate) {
        if let Some(v) = update.allow_comments {
            self.allow_comments = v;
        }
        if let Some(v) = update.allow_voting {
            self.allow_voting = v;
        }
        if let Some(v) = update.require_name {
            self.require_name = v;
        }
    }

    pub fn allows(&self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::Comment => self.allow_comments,
            Interaction::Vote => self.allow_voting,
        }
    }
}

/// Partial update of [`SharePermissions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionsUpdate {
    pub allow_comments: Option<bool>,
    pub allow_voting: Option<bool>,
    pub require_name: Option<bool>,
}

/// Non-owner interactions subject to the permission gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Comment,
    Vote,
}

impl Interaction {
    pub fn disabled_message(&self) -> &'static str {
        match self {
            Interaction::Comment => "Comments are disabled for this list",
            Interaction::Vote => "Voting is disabled for this list",
        }
    }
}
