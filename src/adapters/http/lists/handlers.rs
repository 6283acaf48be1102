//! HTTP handlers for decision-list endpoints.
//!
//! These handlers connect axum routes to the application command/query
//! handlers and translate `ListError` into HTTP responses.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::middleware::{OptionalAuth, Origin, RequireAuth};
use crate::application::handlers::collaboration::{
    AddCommentCommand, AddCommentHandler, CastVoteCommand, CastVoteHandler, DeleteCommentCommand,
    DeleteCommentHandler,
};
use crate::application::handlers::list::{
    AppendTimelineEventCommand, AppendTimelineEventHandler, CreateListCommand, CreateListHandler,
    DeleteListCommand, DeleteListHandler, DuplicateListCommand, DuplicateListHandler,
    GetListHandler, GetListQuery, ListListsHandler, ListListsQuery, SetReminderCommand,
    SetReminderHandler, SetStatusCommand, SetStatusHandler, ToggleArchiveCommand,
    ToggleArchiveHandler, UpcomingRemindersHandler, UpcomingRemindersQuery, UpdateListCommand,
    UpdateListHandler,
};
use crate::application::handlers::sharing::{
    GetPublicListHandler, GetPublicListQuery, ShareListCommand, ShareListHandler,
    UpdatePermissionsCommand, UpdatePermissionsHandler,
};
use crate::domain::collaboration::VoteType;
use crate::domain::foundation::{CommentId, ListId, Timestamp};
use crate::domain::list::{ItemInput, ListError, ListStatus, Outcome};
use crate::domain::sharing::VoterIdHasher;
use crate::ports::ListRepository;

use super::dto::{
    AddCommentRequest, CastVoteResponse, CommentResponse, CreateListRequest, ErrorResponse,
    ListListsParams, ListResponse, ListSummaryResponse, MessageResponse, PublicListResponse,
    SetReminderRequest, SetStatusRequest, ShareResponse, TimelineEventRequest,
    UpdateListRequest, UpdatePermissionsRequest, VoteRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the list routes. Cloned per request.
#[derive(Clone)]
pub struct ListsAppState {
    pub repository: Arc<dyn ListRepository>,
    pub voter_hasher: Arc<VoterIdHasher>,
}

impl ListsAppState {
    pub fn new(repository: Arc<dyn ListRepository>, voter_hasher: Arc<VoterIdHasher>) -> Self {
        Self {
            repository,
            voter_hasher,
        }
    }

    fn repo(&self) -> Arc<dyn ListRepository> {
        self.repository.clone()
    }

    pub fn list_lists_handler(&self) -> ListListsHandler {
        ListListsHandler::new(self.repo())
    }

    pub fn get_list_handler(&self) -> GetListHandler {
        GetListHandler::new(self.repo())
    }

    pub fn create_list_handler(&self) -> CreateListHandler {
        CreateListHandler::new(self.repo())
    }

    pub fn update_list_handler(&self) -> UpdateListHandler {
        UpdateListHandler::new(self.repo())
    }

    pub fn set_status_handler(&self) -> SetStatusHandler {
        SetStatusHandler::new(self.repo())
    }

    pub fn delete_list_handler(&self) -> DeleteListHandler {
        DeleteListHandler::new(self.repo())
    }

    pub fn toggle_archive_handler(&self) -> ToggleArchiveHandler {
        ToggleArchiveHandler::new(self.repo())
    }

    pub fn duplicate_list_handler(&self) -> DuplicateListHandler {
        DuplicateListHandler::new(self.repo())
    }

    pub fn share_list_handler(&self) -> ShareListHandler {
        ShareListHandler::new(self.repo())
    }

    pub fn get_public_list_handler(&self) -> GetPublicListHandler {
        GetPublicListHandler::new(self.repo())
    }

    pub fn update_permissions_handler(&self) -> UpdatePermissionsHandler {
        UpdatePermissionsHandler::new(self.repo())
    }

    pub fn add_comment_handler(&self) -> AddCommentHandler {
        AddCommentHandler::new(self.repo())
    }

    pub fn delete_comment_handler(&self) -> DeleteCommentHandler {
        DeleteCommentHandler::new(self.repo())
    }

    pub fn cast_vote_handler(&self) -> CastVoteHandler {
        CastVoteHandler::new(self.repo(), self.voter_hasher.clone())
    }

    pub fn set_reminder_handler(&self) -> SetReminderHandler {
        SetReminderHandler::new(self.repo())
    }

    pub fn upcoming_reminders_handler(&self) -> UpcomingRemindersHandler {
        UpcomingRemindersHandler::new(self.repo())
    }

    pub fn append_timeline_event_handler(&self) -> AppendTimelineEventHandler {
        AppendTimelineEventHandler::new(self.repo())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Path and field parsing
// ════════════════════════════════════════════════════════════════════════════════

fn parse_list_id(raw: &str) -> Result<ListId, ListApiError> {
    ListId::from_str(raw)
        .map_err(|_| ListError::validation("id", format!("invalid list id '{}'", raw)).into())
}

fn parse_comment_id(raw: &str) -> Result<CommentId, ListApiError> {
    CommentId::from_str(raw).map_err(|_| {
        ListError::validation("commentId", format!("invalid comment id '{}'", raw)).into()
    })
}

fn parse_field<T>(raw: Option<String>) -> Result<Option<T>, ListApiError>
where
    T: FromStr,
    ListError: From<T::Err>,
{
    raw.map(|s| s.parse::<T>().map_err(|e| ListApiError(ListError::from(e))))
        .transpose()
}

fn items(raw: Vec<super::dto::ItemRequest>) -> Vec<ItemInput> {
    raw.into_iter().map(ItemInput::from).collect()
}

// ════════════════════════════════════════════════════════════════════════════════
// Owner: list management
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/lists?archived=true
pub async fn list_lists(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListListsParams>,
) -> Result<impl IntoResponse, ListApiError> {
    let lists = state
        .list_lists_handler()
        .handle(ListListsQuery {
            user_id: user.id,
            include_archived: params.archived,
        })
        .await?;

    let response: Vec<ListSummaryResponse> = lists.iter().map(ListSummaryResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/lists/:id
pub async fn get_list(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ListApiError> {
    let list = state
        .get_list_handler()
        .handle(GetListQuery {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
        })
        .await?;
    Ok(Json(ListResponse::from(&list)))
}

/// POST /api/lists
pub async fn create_list(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let list = state
        .create_list_handler()
        .handle(CreateListCommand {
            user_id: user.id,
            title: request.title,
            description: request.description,
            notes: request.notes,
            items: items(request.items),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ListResponse::from(&list))))
}

/// PUT /api/lists/:id
pub async fn update_list(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<UpdateListRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let cmd = UpdateListCommand {
        list_id: parse_list_id(&id)?,
        user_id: user.id,
        title: request.title,
        description: request.description,
        notes: request.notes,
        items: request.items.map(items),
        outcome: parse_field::<Outcome>(request.outcome)?,
        outcome_rationale: request.outcome_rationale,
        is_public: request.is_public,
        status: parse_field::<ListStatus>(request.status)?,
    };
    let list = state.update_list_handler().handle(cmd).await?;
    Ok(Json(ListResponse::from(&list)))
}

/// PUT /api/lists/:id/status
pub async fn set_status(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<SetStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let status = request.status.parse::<ListStatus>().map_err(ListError::from)?;
    let list = state
        .set_status_handler()
        .handle(SetStatusCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
            status,
        })
        .await?;
    Ok(Json(ListResponse::from(&list)))
}

/// DELETE /api/lists/:id
pub async fn delete_list(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ListApiError> {
    state
        .delete_list_handler()
        .handle(DeleteListCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
        })
        .await?;
    Ok(Json(MessageResponse::new("List removed")))
}

/// PUT /api/lists/:id/archive
pub async fn toggle_archive(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ListApiError> {
    let list = state
        .toggle_archive_handler()
        .handle(ToggleArchiveCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
        })
        .await?;
    Ok(Json(ListResponse::from(&list)))
}

/// POST /api/lists/:id/duplicate
pub async fn duplicate_list(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ListApiError> {
    let copy = state
        .duplicate_list_handler()
        .handle(DuplicateListCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ListResponse::from(&copy))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Sharing
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/lists/:id/share
pub async fn share_list(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ListApiError> {
    let token = state
        .share_list_handler()
        .handle(ShareListCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
        })
        .await?;
    Ok(Json(ShareResponse {
        share_token: token.to_string(),
    }))
}

/// GET /api/lists/public/:token
pub async fn get_public_list(
    State(state): State<ListsAppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ListApiError> {
    let list = state
        .get_public_list_handler()
        .handle(GetPublicListQuery { token })
        .await?;
    Ok(Json(PublicListResponse::from(&list)))
}

/// PUT /api/lists/:id/permissions
pub async fn update_permissions(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePermissionsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let list = state
        .update_permissions_handler()
        .handle(UpdatePermissionsCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
            update: request.into(),
        })
        .await?;
    Ok(Json(ListResponse::from(&list)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Collaboration (owner or public)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/lists/:id/comments
pub async fn add_comment(
    State(state): State<ListsAppState>,
    OptionalAuth(user): OptionalAuth,
    Origin(origin): Origin,
    Path(id): Path<String>,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let comment = state
        .add_comment_handler()
        .handle(AddCommentCommand {
            list_id: parse_list_id(&id)?,
            user,
            origin,
            author_name: request.author_name,
            text: request.text,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from(&comment))))
}

/// DELETE /api/lists/:id/comments/:comment_id
pub async fn delete_comment(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ListApiError> {
    state
        .delete_comment_handler()
        .handle(DeleteCommentCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
            comment_id: parse_comment_id(&comment_id)?,
        })
        .await?;
    Ok(Json(MessageResponse::new("Comment removed")))
}

/// POST /api/lists/:id/vote
pub async fn cast_vote(
    State(state): State<ListsAppState>,
    OptionalAuth(user): OptionalAuth,
    Origin(origin): Origin,
    Path(id): Path<String>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let result = state
        .cast_vote_handler()
        .handle(CastVoteCommand {
            list_id: parse_list_id(&id)?,
            user,
            origin,
            item_id: request.item_id,
            vote_type: parse_field::<VoteType>(
                request.vote_type.filter(|s| !s.trim().is_empty()),
            )?,
        })
        .await?;
    Ok(Json(CastVoteResponse::new(result.change, &result.tally)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Reminders and timeline
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/lists/:id/reminder
pub async fn set_reminder(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<SetReminderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let list = state
        .set_reminder_handler()
        .handle(SetReminderCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
            enabled: request.enabled,
            date: request.date.map(Timestamp::from_datetime),
            note: request.note,
        })
        .await?;
    Ok(Json(ListResponse::from(&list)))
}

/// GET /api/lists/reminders/upcoming
pub async fn upcoming_reminders(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ListApiError> {
    let lists = state
        .upcoming_reminders_handler()
        .handle(UpcomingRemindersQuery { user_id: user.id })
        .await?;
    let response: Vec<ListSummaryResponse> = lists.iter().map(ListSummaryResponse::from).collect();
    Ok(Json(response))
}

/// POST /api/lists/:id/timeline
pub async fn append_timeline_event(
    State(state): State<ListsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<TimelineEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListApiError> {
    let Json(request) = payload?;
    let list = state
        .append_timeline_event_handler()
        .handle(AppendTimelineEventCommand {
            list_id: parse_list_id(&id)?,
            user_id: user.id,
            event: request.event,
            note: request.note,
        })
        .await?;
    Ok(Json(ListResponse::from(&list)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for `ListError`.
#[derive(Debug)]
pub struct ListApiError(pub ListError);

impl From<ListError> for ListApiError {
    fn from(err: ListError) -> Self {
        ListApiError(err)
    }
}

/// Unreadable or mistyped bodies are validation failures, not bare 422s.
impl From<JsonRejection> for ListApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        ListApiError(ListError::validation("body", rejection.body_text()))
    }
}

/// HTTP status for each list error.
pub fn status_for(err: &ListError) -> StatusCode {
    match err {
        ListError::NotFound(_)
        | ListError::PublicNotFound
        | ListError::CommentNotFound(_)
        | ListError::ItemNotFound(_) => StatusCode::NOT_FOUND,
        ListError::Unauthorized => StatusCode::UNAUTHORIZED,
        ListError::Forbidden(_) => StatusCode::FORBIDDEN,
        ListError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ListError::Finalized(_) | ListError::InvalidState(_) | ListError::Conflict(_) => {
            StatusCode::CONFLICT
        }
        ListError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ListApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(&err);
        let code = err.code().to_string();

        let body = match &err {
            ListError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "list operation failed");
                ErrorResponse::new(code, "Internal server error")
            }
            ListError::ValidationFailed { field, message } => ErrorResponse::with_details(
                code,
                message.clone(),
                serde_json::json!({ "field": field }),
            ),
            other => ErrorResponse::new(code, other.message()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ItemId;

    #[test]
    fn status_mapping_follows_error_kind() {
        let id = ListId::new();
        assert_eq!(status_for(&ListError::not_found(id)), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&ListError::public_not_found()), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&ListError::item_not_found(ItemId::new("x").unwrap())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_for(&ListError::unauthorized()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(&ListError::forbidden("no")), StatusCode::FORBIDDEN);
        assert_eq!(
            status_for(&ListError::validation("weight", "bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&ListError::finalized(id)), StatusCode::CONFLICT);
        assert_eq!(status_for(&ListError::conflict("stale")), StatusCode::CONFLICT);
        assert_eq!(
            status_for(&ListError::infrastructure("db down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn infrastructure_errors_are_sanitized() {
        let response = ListApiError(ListError::infrastructure("password=hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_list_id_is_a_validation_error() {
        let err = parse_list_id("not-a-uuid").unwrap_err();
        assert!(matches!(err.0, ListError::ValidationFailed { ref field, .. } if field == "id"));
    }

    #[test]
    fn enum_fields_parse_to_validation_errors() {
        assert_eq!(
            parse_field::<Outcome>(Some("yes".to_string())).unwrap(),
            Some(Outcome::Yes)
        );
        assert!(parse_field::<Outcome>(None).unwrap().is_none());
        let err = parse_field::<ListStatus>(Some("archived".to_string())).unwrap_err();
        assert_eq!(status_for(&err.0), StatusCode::BAD_REQUEST);
    }
}
