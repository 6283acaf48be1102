//! DeleteCommentHandler - Command handler for removing comments.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{CommentId, ListId, OwnedByUser, UserId};
use crate::domain::list::ListError;
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub list_id: ListId,
    pub user_id: UserId,
    pub comment_id: CommentId,
}

/// Only the list owner may delete comments, including visitors' comments.
pub struct DeleteCommentHandler {
    repository: Arc<dyn ListRepository>,
}

impl DeleteCommentHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCommentCommand) -> Result<(), ListError> {
        modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&cmd.user_id)?;
            list.delete_comment(cmd.comment_id)
        })
        .await?;

        info!(list_id = %cmd.list_id, comment_id = %cmd.comment_id, "comment deleted");
        Ok(())
    }
}
