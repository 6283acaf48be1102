//! Axum router for decision-list endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_comment, append_timeline_event, cast_vote, create_list, delete_comment, delete_list,
    duplicate_list, get_list, get_public_list, list_lists, set_reminder, set_status, share_list,
    toggle_archive, update_list, update_permissions, upcoming_reminders, ListsAppState,
};

/// Routes mounted at `/api/lists`.
///
/// ## Owner (Bearer token required)
/// - `GET /` / `POST /` - list summaries / create
/// - `GET|PUT|DELETE /:id` - read, edit, remove
/// - `PUT /:id/status`, `PUT /:id/archive`, `POST /:id/duplicate`
/// - `POST /:id/share`, `PUT /:id/permissions`
/// - `PUT /:id/reminder`, `GET /reminders/upcoming`, `POST /:id/timeline`
/// - `DELETE /:id/comments/:comment_id`
///
/// ## Public (token optional)
/// - `GET /public/:token`
/// - `POST /:id/comments`, `POST /:id/vote`
pub fn list_routes() -> Router<ListsAppState> {
    Router::new()
        .route("/", get(list_lists).post(create_list))
        .route("/public/:token", get(get_public_list))
        .route("/reminders/upcoming", get(upcoming_reminders))
        .route("/:id", get(get_list).put(update_list).delete(delete_list))
        .route("/:id/status", put(set_status))
        .route("/:id/archive", put(toggle_archive))
        .route("/:id/duplicate", post(duplicate_list))
        .route("/:id/share", post(share_list))
        .route("/:id/permissions", put(update_permissions))
        .route("/:id/comments", post(add_comment))
        .route("/:id/comments/:comment_id", delete(delete_comment))
        .route("/:id/vote", post(cast_vote))
        .route("/:id/reminder", put(set_reminder))
        .route("/:id/timeline", post(append_timeline_event))
}
