//! Decision-list error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound / PublicNotFound / CommentNotFound / ItemNotFound | 404 |
//! | Unauthorized | 401 |
//! | Forbidden | 403 |
//! | ValidationFailed | 400 |
//! | Finalized | 409 |
//! | InvalidState | 409 |
//! | Conflict | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{CommentId, DomainError, ErrorCode, ItemId, ListId, ValidationError};

/// Message shared by both "no such token" and "list is private".
pub const PUBLIC_NOT_FOUND_MESSAGE: &str = "List not found or not public";

/// Errors raised by decision-list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// No list with this id.
    NotFound(ListId),

    /// Token unknown, or the list holding it is not public.
    PublicNotFound,

    /// No comment with this id on the list.
    CommentNotFound(CommentId),

    /// Vote references an item that is not on the list.
    ItemNotFound(ItemId),

    /// Caller is not the owner, or is not authenticated on an owner route.
    Unauthorized,

    /// A sharing permission is switched off for this interaction.
    Forbidden(String),

    /// Input failed validation.
    ValidationFailed { field: String, message: String },

    /// Locked field edited while the list is finalized.
    Finalized(ListId),

    /// Lifecycle transition not allowed.
    InvalidState(String),

    /// Concurrent modification could not be reconciled.
    Conflict(String),

    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl ListError {
    pub fn not_found(id: ListId) -> Self {
        ListError::NotFound(id)
    }

    pub fn public_not_found() -> Self {
        ListError::PublicNotFound
    }

    pub fn comment_not_found(id: CommentId) -> Self {
        ListError::CommentNotFound(id)
    }

    pub fn item_not_found(id: ItemId) -> Self {
        ListError::ItemNotFound(id)
    }

    pub fn unauthorized() -> Self {
        ListError::Unauthorized
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        ListError::Forbidden(reason.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ListError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn finalized(id: ListId) -> Self {
        ListError::Finalized(id)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ListError::Conflict(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ListError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ListError::NotFound(_) | ListError::PublicNotFound => ErrorCode::ListNotFound,
            ListError::CommentNotFound(_) => ErrorCode::CommentNotFound,
            ListError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            ListError::Unauthorized => ErrorCode::Unauthorized,
            ListError::Forbidden(_) => ErrorCode::Forbidden,
            ListError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ListError::Finalized(_) => ErrorCode::ListFinalized,
            ListError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            ListError::Conflict(_) => ErrorCode::Conflict,
            ListError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            ListError::NotFound(_) => "List not found".to_string(),
            ListError::PublicNotFound => PUBLIC_NOT_FOUND_MESSAGE.to_string(),
            ListError::CommentNotFound(_) => "Comment not found".to_string(),
            ListError::ItemNotFound(id) => format!("Item not found: {}", id),
            ListError::Unauthorized => "Not authorized".to_string(),
            ListError::Forbidden(reason) => reason.clone(),
            ListError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ListError::Finalized(_) => {
                "List is finalized; reopen it before editing".to_string()
            }
            ListError::InvalidState(msg) => msg.clone(),
            ListError::Conflict(msg) => format!("Concurrent update conflict: {}", msg),
            ListError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if the operation may succeed when retried on fresh state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ListError::Conflict(_))
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ListError {}

impl From<ValidationError> for ListError {
    fn from(err: ValidationError) -> Self {
        ListError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ListError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ListError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::ListNotFound => match err
                .details
                .get("list_id")
                .and_then(|id| id.parse::<ListId>().ok())
            {
                Some(id) => ListError::NotFound(id),
                None => ListError::PublicNotFound,
            },
            ErrorCode::Unauthorized => ListError::Unauthorized,
            ErrorCode::Forbidden => ListError::Forbidden(err.message),
            ErrorCode::InvalidStateTransition => ListError::InvalidState(err.message),
            ErrorCode::Conflict => ListError::Conflict(err.message),
            _ => ListError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ListError> for DomainError {
    fn from(err: ListError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            ListError::NotFound(id) => domain.with_detail("list_id", id.to_string()),
            ListError::ValidationFailed { field, .. } => domain.with_detail("field", field),
            _ => domain,
        }
    }
}
