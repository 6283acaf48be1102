//! CreateListHandler - Command handler for creating decision lists.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::list::{validate_items, DecisionList, ItemInput, ListError, NewList};
use crate::ports::ListRepository;

/// Command to create a list.
#[derive(Debug, Clone)]
pub struct CreateListCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub notes: String,
    pub items: Vec<ItemInput>,
}

/// Handler for creating lists.
pub struct CreateListHandler {
    repository: Arc<dyn ListRepository>,
}

impl CreateListHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateListCommand) -> Result<DecisionList, ListError> {
        let items = validate_items(cmd.items)?;
        let list = DecisionList::create(
            cmd.user_id,
            NewList {
                title: cmd.title,
                description: cmd.description,
                notes: cmd.notes,
                items,
            },
        )?;

        self.repository.save(&list).await?;
        info!(list_id = %list.id(), items = list.items().len(), "list created");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListRepository;
    use crate::application::handlers::test_support::{item_input, user_id};
    use crate::domain::list::ListStatus;

    fn command(title: &str, items: Vec<ItemInput>) -> CreateListCommand {
        CreateListCommand {
            user_id: user_id("owner"),
            title: title.to_string(),
            description: String::new(),
            notes: String::new(),
            items,
        }
    }

    #[tokio::test]
    async fn creates_and_persists_draft() {
        let repo = Arc::new(InMemoryListRepository::new());
        let handler = CreateListHandler::new(repo.clone());

        let list = handler
            .handle(command("Adopt a dog?", vec![item_input("a", "pro", 9)]))
            .await
            .unwrap();

        assert_eq!(list.status(), ListStatus::Draft);
        assert!(repo.find_by_id(&list.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_out_of_range_weight() {
        let repo = Arc::new(InMemoryListRepository::new());
        let handler = CreateListHandler::new(repo.clone());

        let err = handler
            .handle(command("Adopt a dog?", vec![item_input("a", "pro", 11)]))
            .await
            .unwrap_err();

        assert!(matches!(err, ListError::ValidationFailed { ref field, .. } if field == "weight"));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn rejects_blank_title() {
        let handler = CreateListHandler::new(Arc::new(InMemoryListRepository::new()));
        assert!(handler.handle(command("  ", vec![])).await.is_err());
    }
}
