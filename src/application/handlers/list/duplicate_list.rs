//! DuplicateListHandler - Command handler for copying a list.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::{DecisionList, ListError};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct DuplicateListCommand {
    pub list_id: ListId,
    pub user_id: UserId,
}

/// Creates a fresh draft from an owned list's title, description and items.
pub struct DuplicateListHandler {
    repository: Arc<dyn ListRepository>,
}

impl DuplicateListHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DuplicateListCommand) -> Result<DecisionList, ListError> {
        let original = self
            .repository
            .find_by_id(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;
        original.check_ownership(&cmd.user_id)?;

        let copy = original.duplicate()?;
        self.repository.save(&copy).await?;

        info!(source = %original.id(), list_id = %copy.id(), "list duplicated");
        Ok(copy)
    }
}
