//! SetStatusHandler - Command handler for finalizing and reopening lists.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::{DecisionList, ListError, ListStatus};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct SetStatusCommand {
    pub list_id: ListId,
    pub user_id: UserId,
    pub status: ListStatus,
}

/// Moves a list between draft and finalized. Requesting the current
/// status succeeds without recording anything.
pub struct SetStatusHandler {
    repository: Arc<dyn ListRepository>,
}

impl SetStatusHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetStatusCommand) -> Result<DecisionList, ListError> {
        let (list, changed) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&cmd.user_id)?;
            list.set_status(cmd.status)
        })
        .await?;

        if changed {
            info!(list_id = %list.id(), status = %list.status(), "list status changed");
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListRepository;
    use crate::application::handlers::test_support::{saved_list, user_id};

    #[tokio::test]
    async fn finalize_is_idempotent() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        let handler = SetStatusHandler::new(repo);
        let cmd = SetStatusCommand {
            list_id: list.id(),
            user_id: user_id("owner"),
            status: ListStatus::Finalized,
        };

        handler.handle(cmd.clone()).await.unwrap();
        let again = handler.handle(cmd).await.unwrap();

        assert_eq!(again.status(), ListStatus::Finalized);
        assert_eq!(again.timeline().len(), 1);
    }

    #[tokio::test]
    async fn non_owner_cannot_finalize() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        let handler = SetStatusHandler::new(repo);

        let err = handler
            .handle(SetStatusCommand {
                list_id: list.id(),
                user_id: user_id("guest"),
                status: ListStatus::Finalized,
            })
            .await
            .unwrap_err();
        assert_eq!(err, ListError::Unauthorized);
    }
}
