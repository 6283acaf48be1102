//! AppendTimelineEventHandler - Command handler for owner journal entries.

use std::sync::Arc;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::{DecisionList, ListError, TimelineEvent};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct AppendTimelineEventCommand {
    pub list_id: ListId,
    pub user_id: UserId,
    pub event: String,
    pub note: String,
}

pub struct AppendTimelineEventHandler {
    repository: Arc<dyn ListRepository>,
}

impl AppendTimelineEventHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AppendTimelineEventCommand) -> Result<DecisionList, ListError> {
        let event = TimelineEvent::new(cmd.event, cmd.note)?;

        let (list, ()) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&cmd.user_id)?;
            list.append_timeline_event(event.clone());
            Ok(())
        })
        .await?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListRepository;
    use crate::application::handlers::test_support::{saved_list, user_id};
    use crate::domain::list::ListStatus;

    #[tokio::test]
    async fn appends_even_when_finalized() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        crate::application::handlers::modify_list(repo.as_ref(), &list.id(), |l| {
            l.set_status(ListStatus::Finalized)
        })
        .await
        .unwrap();

        let handler = AppendTimelineEventHandler::new(repo);
        let updated = handler
            .handle(AppendTimelineEventCommand {
                list_id: list.id(),
                user_id: user_id("owner"),
                event: "revisited".to_string(),
                note: "Still happy".to_string(),
            })
            .await
            .unwrap();

        let last = updated.timeline().last().unwrap();
        assert_eq!(last.event, "revisited");
        assert_eq!(last.note, "Still happy");
        assert_eq!(updated.timeline().len(), 2);
    }

    #[tokio::test]
    async fn blank_event_is_rejected() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        let handler = AppendTimelineEventHandler::new(repo);

        let err = handler
            .handle(AppendTimelineEventCommand {
                list_id: list.id(),
                user_id: user_id("owner"),
                event: " ".to_string(),
                note: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ListError::ValidationFailed { ref field, .. } if field == "event"));
    }
}
