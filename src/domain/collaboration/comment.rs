//! Comments left on a list by the owner or visitors.

use crate::domain::foundation::{CommentId, Timestamp, UserId, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum comment length, in characters.
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Maximum author name length, in characters.
pub const MAX_AUTHOR_NAME_LENGTH: usize = 100;

/// Name shown when a commenter gives none.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    author_name: String,
    user_id: Option<UserId>,
    text: String,
    is_owner: bool,
    created_at: Timestamp,
}

impl Comment {
    /// Creates a comment.
    ///
    /// A blank or missing `author_name` becomes "Anonymous". `is_owner` is
    /// fixed here and never recomputed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank
    /// - `InvalidFormat` if text or name exceed their length limits
    pub fn new(
        author_name: Option<&str>,
        user_id: Option<UserId>,
        text: &str,
        is_owner: bool,
    ) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        if text.chars().count() > MAX_COMMENT_LENGTH {
            return Err(ValidationError::invalid_format(
                "text",
                format!("must be {} characters or less", MAX_COMMENT_LENGTH),
            ));
        }

        let author_name = match author_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) if name.chars().count() > MAX_AUTHOR_NAME_LENGTH => {
                return Err(ValidationError::invalid_format(
                    "authorName",
                    format!("must be {} characters or less", MAX_AUTHOR_NAME_LENGTH),
                ));
            }
            Some(name) => name.to_string(),
            None => ANONYMOUS_AUTHOR.to_string(),
        };

        Ok(Self {
            id: CommentId::new(),
            author_name,
            user_id,
            text: text.to_string(),
            is_owner,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_owner(&self) -> bool {
        self.is_owner
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_defaults_to_anonymous() {
        let c = Comment::new(Some("   "), None, "Nice list", false).unwrap();
        assert_eq!(c.author_name(), ANONYMOUS_AUTHOR);
        let c = Comment::new(None, None, "Nice list", false).unwrap();
        assert_eq!(c.author_name(), ANONYMOUS_AUTHOR);
    }

    #[test]
    fn text_is_required() {
        let err = Comment::new(Some("Bo"), None, "  ", false).unwrap_err();
        assert_eq!(err.field(), "text");
    }

    #[test]
    fn text_at_limit_is_accepted() {
        assert!(Comment::new(None, None, &"x".repeat(MAX_COMMENT_LENGTH), false).is_ok());
    }

    #[test]
    fn text_over_limit_is_rejected() {
        let err = Comment::new(None, None, &"x".repeat(MAX_COMMENT_LENGTH + 1), false)
            .unwrap_err();
        assert_eq!(err.field(), "text");
    }

    #[test]
    fn owner_flag_and_user_are_kept() {
        let user = UserId::new("owner-1").unwrap();
        let c = Comment::new(Some("Me"), Some(user.clone()), "Decided!", true).unwrap();
        assert!(c.is_owner());
        assert_eq!(c.user_id(), Some(&user));
    }
}
