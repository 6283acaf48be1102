//! DecisionList aggregate.
//!
//! A list is stored and loaded as one document. Every mutation goes through
//! a method here so the lifecycle lock, sharing rules and collaboration
//! rules hold no matter which handler is calling.
//!
//! # Invariants
//!
//! - `title` is 1..=200 characters after trimming
//! - item ids are unique within the list
//! - `share_token`, once minted, never changes
//! - at most one vote per (item, voter); votes only reference current items
//! - while `Finalized`, title/description/notes/items/outcome/rationale are locked
//! - `timeline` is append-only

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::collaboration::{self, Comment, Vote, VoteChange, VoteCount, VoteType};
use crate::domain::foundation::{
    CommentId, ItemId, ListId, OwnedByUser, StateMachine, Timestamp, UserId, ValidationError,
};
use crate::domain::scoring::Score;
use crate::domain::sharing::{
    CallerIdentity, Interaction, PermissionsUpdate, SharePermissions, ShareToken, VoterId,
    VoterIdHasher,
};

use super::reminder::events;
use super::{Item, ListError, ListStatus, Outcome, Reminder, TimelineEvent};

/// Maximum title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of description, notes and rationale, in characters.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Suffix appended to the title of a duplicated list.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Input for creating a list.
#[derive(Debug, Clone, Default)]
pub struct NewList {
    pub title: String,
    pub description: String,
    pub notes: String,
    pub items: Vec<Item>,
}

/// Partial edit of a list. `Some` always overwrites, even with an empty value.
#[derive(Debug, Clone, Default)]
pub struct ListUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub items: Option<Vec<Item>>,
    pub outcome: Option<Outcome>,
    pub outcome_rationale: Option<String>,
    pub is_public: Option<bool>,
    pub status: Option<ListStatus>,
}

impl ListUpdate {
    fn touches_locked_fields(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.notes.is_some()
            || self.items.is_some()
            || self.outcome.is_some()
            || self.outcome_rationale.is_some()
    }
}

/// A weighted pros/cons list owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionList {
    id: ListId,
    owner_id: UserId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    status: ListStatus,
    #[serde(default)]
    outcome: Outcome,
    #[serde(default)]
    outcome_rationale: String,
    #[serde(default)]
    is_public: bool,
    #[serde(default)]
    share_token: Option<ShareToken>,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    share_permissions: SharePermissions,
    #[serde(default)]
    reminder: Reminder,
    #[serde(default)]
    timeline: Vec<TimelineEvent>,
    #[serde(default)]
    comments: Vec<Comment>,
    #[serde(default)]
    votes: Vec<Vote>,
    #[serde(default)]
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DecisionList {
    /// Creates a draft list for `owner`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for a blank or oversized title, oversized text,
    ///   or duplicate item ids
    pub fn create(owner: UserId, input: NewList) -> Result<Self, ListError> {
        let title = validate_title(&input.title)?;
        let description = validate_text("description", input.description)?;
        let notes = validate_text("notes", input.notes)?;
        ensure_unique_item_ids(&input.items)?;

        let now = Timestamp::now();
        Ok(Self {
            id: ListId::new(),
            owner_id: owner,
            title,
            description,
            notes,
            items: input.items,
            status: ListStatus::Draft,
            outcome: Outcome::Undecided,
            outcome_rationale: String::new(),
            is_public: false,
            share_token: None,
            archived: false,
            share_permissions: SharePermissions::default(),
            reminder: Reminder::default(),
            timeline: Vec::new(),
            comments: Vec::new(),
            votes: Vec::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    // ════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn outcome_rationale(&self) -> &str {
        &self.outcome_rationale
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn share_token(&self) -> Option<&ShareToken> {
        self.share_token.as_ref()
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn share_permissions(&self) -> &SharePermissions {
        &self.share_permissions
    }

    pub fn reminder(&self) -> &Reminder {
        &self.reminder
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    /// Storage version this copy was loaded at.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Freshly computed score of the current items.
    pub fn score(&self) -> Score {
        Score::of(&self.items)
    }

    /// Vote counts for every item.
    pub fn tally(&self) -> BTreeMap<ItemId, VoteCount> {
        collaboration::tally(&self.items, &self.votes)
    }

    /// True if this list is publicly readable through `token`.
    pub fn is_shared_via(&self, token: &ShareToken) -> bool {
        self.is_public && self.share_token.as_ref() == Some(token)
    }

    // ════════════════════════════════════════════════════════════════════
    // Owner edits
    // ════════════════════════════════════════════════════════════════════

    /// Applies a partial edit.
    ///
    /// A requested reopen happens before the edits and a requested
    /// finalize after them, so a single update can reopen-edit or
    /// edit-finalize.
    ///
    /// # Errors
    ///
    /// - `Finalized` if locked fields are edited while finalized
    /// - `ValidationFailed` for bad title, text or items
    pub fn update(&mut self, update: ListUpdate) -> Result<(), ListError> {
        let title = update.title.as_deref().map(validate_title).transpose()?;
        let description = update
            .description
            .clone()
            .map(|d| validate_text("description", d))
            .transpose()?;
        let notes = update
            .notes
            .clone()
            .map(|n| validate_text("notes", n))
            .transpose()?;
        let rationale = update
            .outcome_rationale
            .clone()
            .map(|r| validate_text("outcomeRationale", r))
            .transpose()?;
        if let Some(items) = &update.items {
            ensure_unique_item_ids(items)?;
        }

        if update.status == Some(ListStatus::Draft) {
            self.set_status(ListStatus::Draft)?;
        }

        if update.touches_locked_fields() && !self.status.is_editable() {
            return Err(ListError::finalized(self.id));
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(items) = update.items {
            self.replace_items(items);
        }
        if let Some(outcome) = update.outcome {
            self.outcome = outcome;
        }
        if let Some(rationale) = rationale {
            self.outcome_rationale = rationale;
        }

        match update.is_public {
            Some(true) => {
                self.share();
            }
            Some(false) => self.is_public = false,
            None => {}
        }

        if update.status == Some(ListStatus::Finalized) {
            self.set_status(ListStatus::Finalized)?;
        }

        self.touch();
        Ok(())
    }

    fn replace_items(&mut self, items: Vec<Item>) {
        let kept: HashSet<&ItemId> = items.iter().map(Item::id).collect();
        self.votes.retain(|v| kept.contains(&v.item_id));
        self.items = items;
    }

    /// Moves the list to `target`.
    ///
    /// Returns `false` (and records nothing) if already there.
    pub fn set_status(&mut self, target: ListStatus) -> Result<bool, ListError> {
        if self.status == target {
            return Ok(false);
        }
        self.status = self.status.transition_to(target)?;
        let tag = match target {
            ListStatus::Finalized => events::FINALIZED,
            ListStatus::Draft => events::REOPENED,
        };
        self.timeline.push(TimelineEvent::system(tag, ""));
        self.touch();
        Ok(true)
    }

    /// Flips the archived flag and returns the new value.
    pub fn toggle_archive(&mut self) -> bool {
        self.archived = !self.archived;
        self.touch();
        self.archived
    }

    /// Makes the list public, minting a token the first time.
    pub fn share(&mut self) -> &ShareToken {
        self.is_public = true;
        self.touch();
        self.share_token.get_or_insert_with(ShareToken::generate)
    }

    pub fn update_permissions(&mut self, update: PermissionsUpdate) {
        self.share_permissions.apply(update);
        self.touch();
    }

    /// Sets or clears the follow-up reminder and records it on the timeline.
    pub fn set_reminder(&mut self, reminder: Reminder) {
        let event = if reminder.enabled {
            let note = reminder
                .date
                .map(|d| d.as_datetime().to_rfc3339())
                .unwrap_or_default();
            TimelineEvent::system(events::REMINDER_SET, note)
        } else {
            TimelineEvent::system(events::REMINDER_CLEARED, "")
        };
        self.reminder = reminder;
        self.timeline.push(event);
        self.touch();
    }

    pub fn append_timeline_event(&mut self, event: TimelineEvent) {
        self.timeline.push(event);
        self.touch();
    }

    /// A fresh draft copy with the same owner, description and items.
    ///
    /// Items get new ids. Sharing, collaboration, timeline, notes and
    /// reminder start from defaults.
    pub fn duplicate(&self) -> Result<Self, ListError> {
        let title = truncate_chars(&format!("{}{}", self.title, COPY_SUFFIX), MAX_TITLE_LENGTH);
        Self::create(
            self.owner_id.clone(),
            NewList {
                title,
                description: self.description.clone(),
                notes: String::new(),
                items: self.items.iter().map(Item::with_fresh_id).collect(),
            },
        )
    }

    // ════════════════════════════════════════════════════════════════════
    // Collaboration
    // ════════════════════════════════════════════════════════════════════

    /// Checks the permission gate for a non-owner interaction.
    ///
    /// Owners always pass. For anyone else a private list does not exist
    /// and a disabled switch is forbidden.
    pub fn authorize(&self, caller: &CallerIdentity, interaction: Interaction) -> Result<(), ListError> {
        if caller.is_owner() {
            return Ok(());
        }
        if !self.is_public {
            return Err(ListError::not_found(self.id));
        }
        if !self.share_permissions.allows(interaction) {
            return Err(ListError::forbidden(interaction.disabled_message()));
        }
        Ok(())
    }

    /// Adds a comment and returns it.
    ///
    /// Signed-in commenters without an explicit name are shown under their
    /// account name.
    pub fn add_comment(
        &mut self,
        caller: &CallerIdentity,
        author_name: Option<&str>,
        text: &str,
    ) -> Result<&Comment, ListError> {
        self.authorize(caller, Interaction::Comment)?;

        let given = author_name.map(str::trim).filter(|n| !n.is_empty());
        let name = match caller {
            CallerIdentity::Anonymous(_) => {
                if self.share_permissions.require_name && given.is_none() {
                    return Err(ValidationError::empty_field("authorName").into());
                }
                given
            }
            CallerIdentity::Owner(user) | CallerIdentity::Authenticated(user) => {
                Some(given.unwrap_or_else(|| user.comment_name()))
            }
        };

        let comment = Comment::new(name, caller.user_id().cloned(), text, caller.is_owner())?;
        self.comments.push(comment);
        self.touch();
        self.comments
            .last()
            .ok_or_else(|| ListError::infrastructure("comment was not recorded"))
    }

    /// Removes a comment. Ownership is checked by the caller.
    pub fn delete_comment(&mut self, comment_id: CommentId) -> Result<(), ListError> {
        let idx = self
            .comments
            .iter()
            .position(|c| c.id() == comment_id)
            .ok_or_else(|| ListError::comment_not_found(comment_id))?;
        self.comments.remove(idx);
        self.touch();
        Ok(())
    }

    /// Casts, switches, retracts or removes the caller's vote on an item.
    pub fn vote(
        &mut self,
        caller: &CallerIdentity,
        hasher: &VoterIdHasher,
        item_id: &ItemId,
        vote_type: Option<VoteType>,
    ) -> Result<VoteChange, ListError> {
        self.authorize(caller, Interaction::Vote)?;

        if !self.items.iter().any(|i| i.id() == item_id) {
            return Err(ListError::item_not_found(item_id.clone()));
        }

        let voter_id: VoterId = match caller {
            CallerIdentity::Owner(user) | CallerIdentity::Authenticated(user) => {
                hasher.authenticated(&user.id)
            }
            CallerIdentity::Anonymous(origin) => hasher.anonymous(origin, item_id),
        };

        let change = collaboration::apply_vote(&mut self.votes, item_id, &voter_id, vote_type);
        if change != VoteChange::Unchanged {
            self.touch();
        }
        Ok(change)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl OwnedByUser for DecisionList {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::empty_field("title"));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::invalid_format(
            "title",
            format!("must be {} characters or less", MAX_TITLE_LENGTH),
        ));
    }
    Ok(title.to_string())
}

fn validate_text(field: &str, text: String) -> Result<String, ValidationError> {
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::invalid_format(
            field,
            format!("must be {} characters or less", MAX_TEXT_LENGTH),
        ));
    }
    Ok(text)
}

fn ensure_unique_item_ids(items: &[Item]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(ValidationError::invalid_format(
                "items",
                format!("duplicate item id '{}'", item.id()),
            ));
        }
    }
    Ok(())
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AuthenticatedUser;
    use crate::domain::list::test_support::item;
    use crate::domain::sharing::ClientOrigin;
    use secrecy::SecretString;

    fn owner() -> UserId {
        UserId::new("owner-1").unwrap()
    }

    fn owner_caller() -> CallerIdentity {
        CallerIdentity::Owner(AuthenticatedUser::new(owner(), None, Some("Olive".to_string())))
    }

    fn guest_caller() -> CallerIdentity {
        CallerIdentity::Authenticated(AuthenticatedUser::new(
            UserId::new("guest-1").unwrap(),
            None,
            Some("Gus".to_string()),
        ))
    }

    fn anon(origin: &str) -> CallerIdentity {
        CallerIdentity::Anonymous(ClientOrigin::new(origin))
    }

    fn hasher() -> VoterIdHasher {
        VoterIdHasher::new(&SecretString::new("test-secret".to_string())).unwrap()
    }

    fn list() -> DecisionList {
        DecisionList::create(
            owner(),
            NewList {
                title: "  Move to Lisbon?  ".to_string(),
                description: "Job offer".to_string(),
                notes: String::new(),
                items: vec![item("a", "pro", 8), item("b", "con", 4)],
            },
        )
        .unwrap()
    }

    fn item_id(id: &str) -> ItemId {
        ItemId::new(id).unwrap()
    }

    // ── creation ────────────────────────────────────────────────────────

    #[test]
    fn create_starts_as_private_draft() {
        let l = list();
        assert_eq!(l.title(), "Move to Lisbon?");
        assert_eq!(l.status(), ListStatus::Draft);
        assert_eq!(l.outcome(), Outcome::Undecided);
        assert!(!l.is_public());
        assert!(l.share_token().is_none());
        assert!(l.timeline().is_empty());
        assert!(l.is_owner(&owner()));
    }

    #[test]
    fn create_rejects_blank_title() {
        let err = DecisionList::create(
            owner(),
            NewList {
                title: "   ".to_string(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ListError::ValidationFailed { ref field, .. } if field == "title"));
    }

    #[test]
    fn create_rejects_long_title() {
        let result = DecisionList::create(
            owner(),
            NewList {
                title: "t".repeat(MAX_TITLE_LENGTH + 1),
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_duplicate_item_ids() {
        let result = DecisionList::create(
            owner(),
            NewList {
                title: "Dup".to_string(),
                items: vec![item("a", "pro", 1), item("a", "con", 2)],
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    // ── lifecycle ───────────────────────────────────────────────────────

    #[test]
    fn finalize_then_reopen_records_events() {
        let mut l = list();
        assert!(l.set_status(ListStatus::Finalized).unwrap());
        assert!(l.set_status(ListStatus::Draft).unwrap());
        let tags: Vec<_> = l.timeline().iter().map(|e| e.event.as_str()).collect();
        assert_eq!(tags, vec!["finalized", "reopened"]);
    }

    #[test]
    fn set_status_to_current_state_is_noop() {
        let mut l = list();
        assert!(!l.set_status(ListStatus::Draft).unwrap());
        assert!(l.timeline().is_empty());
    }

    #[test]
    fn finalized_list_rejects_item_edits() {
        let mut l = list();
        l.set_status(ListStatus::Finalized).unwrap();
        let err = l
            .update(ListUpdate {
                items: Some(vec![item("c", "pro", 2)]),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ListError::Finalized(l.id()));
        assert_eq!(l.items().len(), 2);
    }

    #[test]
    fn finalized_list_rejects_each_locked_field() {
        let edits = vec![
            ListUpdate { title: Some("x".into()), ..Default::default() },
            ListUpdate { description: Some("x".into()), ..Default::default() },
            ListUpdate { notes: Some("x".into()), ..Default::default() },
            ListUpdate { outcome: Some(Outcome::Yes), ..Default::default() },
            ListUpdate { outcome_rationale: Some("x".into()), ..Default::default() },
        ];
        for edit in edits {
            let mut l = list();
            l.set_status(ListStatus::Finalized).unwrap();
            assert!(matches!(l.update(edit), Err(ListError::Finalized(_))));
        }
    }

    #[test]
    fn finalized_list_still_allows_sharing_and_permissions() {
        let mut l = list();
        l.set_status(ListStatus::Finalized).unwrap();
        l.share();
        l.update_permissions(PermissionsUpdate {
            allow_voting: Some(false),
            ..Default::default()
        });
        l.update(ListUpdate {
            is_public: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert!(!l.share_permissions().allow_voting);
        assert!(!l.is_public());
    }

    #[test]
    fn update_can_reopen_and_edit_in_one_step() {
        let mut l = list();
        l.set_status(ListStatus::Finalized).unwrap();
        l.update(ListUpdate {
            status: Some(ListStatus::Draft),
            title: Some("Reconsidered".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(l.status(), ListStatus::Draft);
        assert_eq!(l.title(), "Reconsidered");
    }

    #[test]
    fn update_can_edit_and_finalize_in_one_step() {
        let mut l = list();
        l.update(ListUpdate {
            outcome: Some(Outcome::Yes),
            status: Some(ListStatus::Finalized),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(l.outcome(), Outcome::Yes);
        assert_eq!(l.status(), ListStatus::Finalized);
    }

    #[test]
    fn update_overwrites_with_empty_values() {
        let mut l = list();
        l.update(ListUpdate {
            description: Some(String::new()),
            items: Some(Vec::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(l.description(), "");
        assert!(l.items().is_empty());
    }

    #[test]
    fn update_rejects_empty_title() {
        let mut l = list();
        let err = l
            .update(ListUpdate {
                title: Some(String::new()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ListError::ValidationFailed { .. }));
        assert_eq!(l.title(), "Move to Lisbon?");
    }

    #[test]
    fn replacing_items_prunes_their_votes() {
        let mut l = list();
        l.share();
        l.vote(&anon("1.1.1.1"), &hasher(), &item_id("a"), Some(VoteType::Up))
            .unwrap();
        l.vote(&anon("1.1.1.1"), &hasher(), &item_id("b"), Some(VoteType::Up))
            .unwrap();

        l.update(ListUpdate {
            items: Some(vec![item("b", "con", 4)]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(l.votes().len(), 1);
        assert_eq!(l.votes()[0].item_id, item_id("b"));
    }

    // ── sharing ─────────────────────────────────────────────────────────

    #[test]
    fn share_is_idempotent() {
        let mut l = list();
        let first = l.share().clone();
        let second = l.share().clone();
        assert_eq!(first, second);
        assert!(l.is_public());
        assert!(l.is_shared_via(&first));
    }

    #[test]
    fn unsharing_keeps_token_for_reuse() {
        let mut l = list();
        let token = l.share().clone();
        l.update(ListUpdate {
            is_public: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert!(!l.is_shared_via(&token));
        assert_eq!(l.share_token(), Some(&token));
        assert_eq!(l.share(), &token);
    }

    #[test]
    fn making_public_via_update_mints_token() {
        let mut l = list();
        l.update(ListUpdate {
            is_public: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert!(l.share_token().is_some());
    }

    #[test]
    fn other_tokens_do_not_match() {
        let mut l = list();
        l.share();
        assert!(!l.is_shared_via(&ShareToken::generate()));
    }

    // ── comments ────────────────────────────────────────────────────────

    #[test]
    fn anonymous_comment_on_private_list_is_not_found() {
        let mut l = list();
        let err = l.add_comment(&anon("1.1.1.1"), None, "hi").unwrap_err();
        assert!(matches!(err, ListError::NotFound(_)));
    }

    #[test]
    fn comment_blocked_when_disabled() {
        let mut l = list();
        l.share();
        l.update_permissions(PermissionsUpdate {
            allow_comments: Some(false),
            ..Default::default()
        });
        let err = l.add_comment(&guest_caller(), None, "hi").unwrap_err();
        assert!(matches!(err, ListError::Forbidden(_)));
    }

    #[test]
    fn owner_bypasses_permission_gate() {
        let mut l = list();
        l.update_permissions(PermissionsUpdate {
            allow_comments: Some(false),
            ..Default::default()
        });
        let c = l.add_comment(&owner_caller(), None, "note to self").unwrap();
        assert!(c.is_owner());
        assert_eq!(c.author_name(), "Olive");
    }

    #[test]
    fn anonymous_comment_requires_name_when_configured() {
        let mut l = list();
        l.share();
        l.update_permissions(PermissionsUpdate {
            require_name: Some(true),
            ..Default::default()
        });
        let err = l.add_comment(&anon("1.1.1.1"), Some("  "), "hi").unwrap_err();
        assert!(
            matches!(err, ListError::ValidationFailed { ref field, .. } if field == "authorName")
        );
        assert!(l.add_comment(&anon("1.1.1.1"), Some("Ana"), "hi").is_ok());
    }

    #[test]
    fn anonymous_comment_defaults_to_anonymous() {
        let mut l = list();
        l.share();
        let c = l.add_comment(&anon("1.1.1.1"), None, "hi").unwrap();
        assert_eq!(c.author_name(), "Anonymous");
        assert!(c.user_id().is_none());
        assert!(!c.is_owner());
    }

    #[test]
    fn authenticated_comment_uses_account_name() {
        let mut l = list();
        l.share();
        let c = l.add_comment(&guest_caller(), None, "hi").unwrap();
        assert_eq!(c.author_name(), "Gus");
        assert_eq!(c.user_id().map(UserId::as_str), Some("guest-1"));
        assert!(!c.is_owner());
    }

    #[test]
    fn comments_allowed_on_finalized_list() {
        let mut l = list();
        l.share();
        l.set_status(ListStatus::Finalized).unwrap();
        assert!(l.add_comment(&anon("1.1.1.1"), None, "congrats").is_ok());
    }

    #[test]
    fn delete_comment_removes_it() {
        let mut l = list();
        let id = l.add_comment(&owner_caller(), None, "x").unwrap().id();
        l.delete_comment(id).unwrap();
        assert!(l.comments().is_empty());
        assert_eq!(l.delete_comment(id), Err(ListError::CommentNotFound(id)));
    }

    // ── votes ───────────────────────────────────────────────────────────

    #[test]
    fn vote_for_unknown_item_is_not_found() {
        let mut l = list();
        l.share();
        let err = l
            .vote(&anon("1.1.1.1"), &hasher(), &item_id("zzz"), Some(VoteType::Up))
            .unwrap_err();
        assert!(matches!(err, ListError::ItemNotFound(_)));
    }

    #[test]
    fn vote_blocked_when_voting_disabled() {
        let mut l = list();
        l.share();
        l.update_permissions(PermissionsUpdate {
            allow_voting: Some(false),
            ..Default::default()
        });
        let err = l
            .vote(&anon("1.1.1.1"), &hasher(), &item_id("a"), Some(VoteType::Up))
            .unwrap_err();
        assert!(matches!(err, ListError::Forbidden(_)));
    }

    #[test]
    fn repeat_vote_from_same_origin_toggles() {
        let mut l = list();
        l.share();
        let h = hasher();
        l.vote(&anon("1.1.1.1"), &h, &item_id("a"), Some(VoteType::Up)).unwrap();
        assert_eq!(l.tally()[&item_id("a")].up, 1);
        l.vote(&anon("1.1.1.1"), &h, &item_id("a"), Some(VoteType::Up)).unwrap();
        assert_eq!(l.tally()[&item_id("a")].up, 0);
    }

    #[test]
    fn different_origins_count_separately() {
        let mut l = list();
        l.share();
        let h = hasher();
        l.vote(&anon("1.1.1.1"), &h, &item_id("a"), Some(VoteType::Up)).unwrap();
        l.vote(&anon("2.2.2.2"), &h, &item_id("a"), Some(VoteType::Down)).unwrap();
        assert_eq!(l.tally()[&item_id("a")], VoteCount { up: 1, down: 1 });
    }

    #[test]
    fn signed_in_voter_is_recorded_by_account() {
        let mut l = list();
        l.share();
        l.vote(&guest_caller(), &hasher(), &item_id("b"), Some(VoteType::Down))
            .unwrap();
        assert_eq!(l.votes()[0].voter_id.as_str(), "guest-1");
    }

    // ── archive / duplicate / reminders ─────────────────────────────────

    #[test]
    fn toggle_archive_flips_flag() {
        let mut l = list();
        assert!(l.toggle_archive());
        assert!(!l.toggle_archive());
    }

    #[test]
    fn duplicate_copies_content_and_resets_the_rest() {
        let mut l = list();
        l.share();
        l.add_comment(&owner_caller(), None, "hi").unwrap();
        l.vote(&owner_caller(), &hasher(), &item_id("a"), Some(VoteType::Up))
            .unwrap();
        l.set_status(ListStatus::Finalized).unwrap();

        let copy = l.duplicate().unwrap();
        assert_ne!(copy.id(), l.id());
        assert_eq!(copy.title(), "Move to Lisbon? (Copy)");
        assert_eq!(copy.description(), l.description());
        assert_eq!(copy.items().len(), 2);
        assert_ne!(copy.items()[0].id(), l.items()[0].id());
        assert_eq!(copy.items()[0].title(), l.items()[0].title());
        assert_eq!(copy.status(), ListStatus::Draft);
        assert!(!copy.is_public());
        assert!(copy.share_token().is_none());
        assert!(copy.comments().is_empty());
        assert!(copy.votes().is_empty());
        assert!(copy.timeline().is_empty());
        assert!(copy.is_owner(&owner()));
    }

    #[test]
    fn duplicate_of_max_length_title_stays_valid() {
        let l = DecisionList::create(
            owner(),
            NewList {
                title: "t".repeat(MAX_TITLE_LENGTH),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(l.duplicate().unwrap().title().chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn set_reminder_appends_timeline_entry() {
        let mut l = list();
        let date = Timestamp::now().add_days(7);
        l.set_reminder(Reminder::new(true, Some(date), "check rent").unwrap());
        assert!(l.reminder().enabled);
        assert_eq!(l.timeline().last().unwrap().event, events::REMINDER_SET);

        l.set_reminder(Reminder::new(false, None, "").unwrap());
        assert_eq!(l.timeline().last().unwrap().event, events::REMINDER_CLEARED);
    }

    #[test]
    fn score_reflects_items() {
        assert_eq!(list().score().leaning().to_string(), "leaning yes (67%)");
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut l = list();
        l.share();
        let json = serde_json::to_value(&l).unwrap();
        let back: DecisionList = serde_json::from_value(json).unwrap();
        assert_eq!(back, l);
    }
}
