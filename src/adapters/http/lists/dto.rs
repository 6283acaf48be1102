//! HTTP DTOs for decision-list endpoints.
//!
//! JSON bodies are camelCase. Enum-valued request fields arrive as plain
//! strings and are parsed in the handlers, so a bad value is a 400 with the
//! field name rather than a body rejection.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::collaboration::{Comment, Vote, VoteChange, VoteCount, VoteType};
use crate::domain::foundation::{ItemId, Timestamp};
use crate::domain::list::{DecisionList, Item, ItemInput, ListStatus, Outcome, Reminder, TimelineEvent};
use crate::domain::scoring::Score;
use crate::domain::sharing::{PermissionsUpdate, SharePermissions};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One pro or con as sent by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// Client-chosen id; generated when absent.
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub weight: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<ItemRequest> for ItemInput {
    fn from(req: ItemRequest) -> Self {
        ItemInput {
            id: req.id,
            title: req.title,
            description: req.description,
            weight: req.weight,
            kind: req.kind,
            tags: req.tags,
        }
    }
}

/// Request to create a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub items: Vec<ItemRequest>,
}

/// Partial update; absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub items: Option<Vec<ItemRequest>>,
    pub outcome: Option<String>,
    pub outcome_rationale: Option<String>,
    pub is_public: Option<bool>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// Query string for `GET /api/lists`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListListsParams {
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePermissionsRequest {
    pub allow_comments: Option<bool>,
    pub allow_voting: Option<bool>,
    pub require_name: Option<bool>,
}

impl From<UpdatePermissionsRequest> for PermissionsUpdate {
    fn from(req: UpdatePermissionsRequest) -> Self {
        PermissionsUpdate {
            allow_comments: req.allow_comments,
            allow_voting: req.allow_voting,
            require_name: req.require_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author_name: Option<String>,
}

/// Vote request; a missing or null `voteType` removes the caller's vote.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub item_id: String,
    #[serde(default)]
    pub vote_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetReminderRequest {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEventRequest {
    pub event: String,
    #[serde(default)]
    pub note: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub weight: u8,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tags: Vec<String>,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().to_string(),
            description: item.description().map(str::to_string),
            weight: item.weight().value(),
            kind: item.kind().as_str(),
            tags: item.tags().to_vec(),
        }
    }
}

/// Weighted totals plus a human-readable leaning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub pro: u32,
    pub con: u32,
    pub total: u32,
    pub tilt: f64,
    pub leaning: String,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            pro: score.pro,
            con: score.con,
            total: score.total,
            tilt: score.tilt,
            leaning: score.leaning().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePermissionsResponse {
    pub allow_comments: bool,
    pub allow_voting: bool,
    pub require_name: bool,
}

impl From<&SharePermissions> for SharePermissionsResponse {
    fn from(p: &SharePermissions) -> Self {
        Self {
            allow_comments: p.allow_comments,
            allow_voting: p.allow_voting,
            require_name: p.require_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderResponse {
    pub enabled: bool,
    pub date: Option<Timestamp>,
    pub note: String,
}

impl From<&Reminder> for ReminderResponse {
    fn from(r: &Reminder) -> Self {
        Self {
            enabled: r.enabled,
            date: r.date,
            note: r.note.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEventResponse {
    pub event: String,
    pub timestamp: Timestamp,
    pub note: String,
}

impl From<&TimelineEvent> for TimelineEventResponse {
    fn from(e: &TimelineEvent) -> Self {
        Self {
            event: e.event.clone(),
            timestamp: e.timestamp,
            note: e.note.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub author_name: String,
    pub user_id: Option<String>,
    pub text: String,
    pub is_owner: bool,
    pub created_at: Timestamp,
}

impl From<&Comment> for CommentResponse {
    fn from(c: &Comment) -> Self {
        Self {
            id: c.id().to_string(),
            author_name: c.author_name().to_string(),
            user_id: c.user_id().map(|u| u.to_string()),
            text: c.text().to_string(),
            is_owner: c.is_owner(),
            created_at: *c.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub item_id: String,
    pub voter_id: String,
    pub vote_type: &'static str,
    pub cast_at: Timestamp,
}

impl From<&Vote> for VoteResponse {
    fn from(v: &Vote) -> Self {
        Self {
            item_id: v.item_id.to_string(),
            voter_id: v.voter_id.as_str().to_string(),
            vote_type: vote_type_str(v.vote_type),
            cast_at: v.cast_at,
        }
    }
}

fn vote_type_str(t: VoteType) -> &'static str {
    match t {
        VoteType::Up => "up",
        VoteType::Down => "down",
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoteCountResponse {
    pub up: u32,
    pub down: u32,
}

impl From<&VoteCount> for VoteCountResponse {
    fn from(c: &VoteCount) -> Self {
        Self {
            up: c.up,
            down: c.down,
        }
    }
}

fn tally_response(tally: &BTreeMap<ItemId, VoteCount>) -> BTreeMap<String, VoteCountResponse> {
    tally
        .iter()
        .map(|(id, count)| (id.to_string(), VoteCountResponse::from(count)))
        .collect()
}

/// Full list as seen by its owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub notes: String,
    pub items: Vec<ItemResponse>,
    pub status: ListStatus,
    pub outcome: Outcome,
    pub outcome_rationale: String,
    pub is_public: bool,
    pub share_token: Option<String>,
    pub archived: bool,
    pub share_permissions: SharePermissionsResponse,
    pub reminder: ReminderResponse,
    pub timeline: Vec<TimelineEventResponse>,
    pub comments: Vec<CommentResponse>,
    pub votes: Vec<VoteResponse>,
    pub vote_tally: BTreeMap<String, VoteCountResponse>,
    pub score: ScoreResponse,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&DecisionList> for ListResponse {
    fn from(list: &DecisionList) -> Self {
        use crate::domain::foundation::OwnedByUser;

        Self {
            id: list.id().to_string(),
            owner_id: list.owner_id().to_string(),
            title: list.title().to_string(),
            description: list.description().to_string(),
            notes: list.notes().to_string(),
            items: list.items().iter().map(ItemResponse::from).collect(),
            status: list.status(),
            outcome: list.outcome(),
            outcome_rationale: list.outcome_rationale().to_string(),
            is_public: list.is_public(),
            share_token: list.share_token().map(|t| t.to_string()),
            archived: list.is_archived(),
            share_permissions: list.share_permissions().into(),
            reminder: list.reminder().into(),
            timeline: list.timeline().iter().map(TimelineEventResponse::from).collect(),
            comments: list.comments().iter().map(CommentResponse::from).collect(),
            votes: list.votes().iter().map(VoteResponse::from).collect(),
            vote_tally: tally_response(&list.tally()),
            score: list.score().into(),
            created_at: *list.created_at(),
            updated_at: *list.updated_at(),
        }
    }
}

/// List as seen through a share link.
///
/// Owner-private fields (notes, reminder, timeline) are left out. Votes are
/// exposed only as per-item counts, never as the raw vote records, so
/// anonymous voter hashes do not leave the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicListResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub items: Vec<ItemResponse>,
    pub status: ListStatus,
    pub outcome: Outcome,
    pub outcome_rationale: String,
    pub share_permissions: SharePermissionsResponse,
    pub comments: Vec<CommentResponse>,
    pub vote_tally: BTreeMap<String, VoteCountResponse>,
    pub score: ScoreResponse,
    pub updated_at: Timestamp,
}

impl From<&DecisionList> for PublicListResponse {
    fn from(list: &DecisionList) -> Self {
        Self {
            id: list.id().to_string(),
            title: list.title().to_string(),
            description: list.description().to_string(),
            items: list.items().iter().map(ItemResponse::from).collect(),
            status: list.status(),
            outcome: list.outcome(),
            outcome_rationale: list.outcome_rationale().to_string(),
            share_permissions: list.share_permissions().into(),
            comments: list.comments().iter().map(CommentResponse::from).collect(),
            vote_tally: tally_response(&list.tally()),
            score: list.score().into(),
            updated_at: *list.updated_at(),
        }
    }
}

/// Row in the owner's list overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummaryResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ListStatus,
    pub outcome: Outcome,
    pub is_public: bool,
    pub archived: bool,
    pub item_count: usize,
    pub score: ScoreResponse,
    pub reminder: ReminderResponse,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&DecisionList> for ListSummaryResponse {
    fn from(list: &DecisionList) -> Self {
        Self {
            id: list.id().to_string(),
            title: list.title().to_string(),
            description: list.description().to_string(),
            status: list.status(),
            outcome: list.outcome(),
            is_public: list.is_public(),
            archived: list.is_archived(),
            item_count: list.items().len(),
            score: list.score().into(),
            reminder: list.reminder().into(),
            created_at: *list.created_at(),
            updated_at: *list.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub share_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CastVoteResponse {
    pub change: &'static str,
    pub votes: BTreeMap<String, VoteCountResponse>,
}

impl CastVoteResponse {
    pub fn new(change: VoteChange, tally: &BTreeMap<ItemId, VoteCount>) -> Self {
        let change = match change {
            VoteChange::Cast => "cast",
            VoteChange::Replaced => "replaced",
            VoteChange::Retracted => "retracted",
            VoteChange::Removed => "removed",
            VoteChange::Unchanged => "unchanged",
        };
        Self {
            change,
            votes: tally_response(tally),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body for all list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
