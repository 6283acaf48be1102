//! DeleteListHandler - Command handler for permanently removing lists.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::ListError;
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct DeleteListCommand {
    pub list_id: ListId,
    pub user_id: UserId,
}

pub struct DeleteListHandler {
    repository: Arc<dyn ListRepository>,
}

impl DeleteListHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteListCommand) -> Result<(), ListError> {
        let list = self
            .repository
            .find_by_id(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;
        list.check_ownership(&cmd.user_id)?;

        self.repository.delete(&cmd.list_id).await?;
        info!(list_id = %cmd.list_id, "list deleted");
        Ok(())
    }
}
