//! ToggleArchiveHandler - Command handler for archiving and unarchiving.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::{DecisionList, ListError};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct ToggleArchiveCommand {
    pub list_id: ListId,
    pub user_id: UserId,
}

pub struct ToggleArchiveHandler {
    repository: Arc<dyn ListRepository>,
}

impl ToggleArchiveHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ToggleArchiveCommand) -> Result<DecisionList, ListError> {
        let (list, archived) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&cmd.user_id)?;
            Ok(list.toggle_archive())
        })
        .await?;

        info!(list_id = %list.id(), archived, "list archive flag toggled");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListRepository;
    use crate::application::handlers::test_support::{saved_list, user_id};

    #[tokio::test]
    async fn toggles_back_and_forth() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        let handler = ToggleArchiveHandler::new(repo);
        let cmd = ToggleArchiveCommand {
            list_id: list.id(),
            user_id: user_id("owner"),
        };

        assert!(handler.handle(cmd.clone()).await.unwrap().is_archived());
        assert!(!handler.handle(cmd).await.unwrap().is_archived());
    }
}
