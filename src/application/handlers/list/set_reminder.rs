//! SetReminderHandler - Command handler for follow-up reminders.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{ListId, OwnedByUser, Timestamp, UserId};
use crate::domain::list::{DecisionList, ListError, Reminder};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct SetReminderCommand {
    pub list_id: ListId,
    pub user_id: UserId,
    pub enabled: bool,
    pub date: Option<Timestamp>,
    pub note: String,
}

pub struct SetReminderHandler {
    repository: Arc<dyn ListRepository>,
}

impl SetReminderHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetReminderCommand) -> Result<DecisionList, ListError> {
        let reminder = Reminder::new(cmd.enabled, cmd.date, cmd.note)?;

        let (list, ()) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&cmd.user_id)?;
            list.set_reminder(reminder.clone());
            Ok(())
        })
        .await?;

        info!(list_id = %list.id(), enabled = cmd.enabled, "reminder updated");
        Ok(list)
    }
}
