//! UpdateListHandler - Command handler for partial list edits.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::{
    validate_items, DecisionList, ItemInput, ListError, ListStatus, ListUpdate, Outcome,
};
use crate::ports::ListRepository;

/// Command to edit a list. `None` leaves a field untouched; `Some` always
/// overwrites, including with an empty value.
#[derive(Debug, Clone)]
pub struct UpdateListCommand {
    pub list_id: ListId,
    pub user_id: UserId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub items: Option<Vec<ItemInput>>,
    pub outcome: Option<Outcome>,
    pub outcome_rationale: Option<String>,
    pub is_public: Option<bool>,
    pub status: Option<ListStatus>,
}

pub struct UpdateListHandler {
    repository: Arc<dyn ListRepository>,
}

impl UpdateListHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateListCommand) -> Result<DecisionList, ListError> {
        let items = cmd.items.map(validate_items).transpose()?;
        let update = ListUpdate {
            title: cmd.title,
            description: cmd.description,
            notes: cmd.notes,
            items,
            outcome: cmd.outcome,
            outcome_rationale: cmd.outcome_rationale,
            is_public: cmd.is_public,
            status: cmd.status,
        };
        let user_id = cmd.user_id;

        let (list, ()) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&user_id)?;
            list.update(update.clone())
        })
        .await?;

        info!(list_id = %list.id(), status = %list.status(), "list updated");
        Ok(list)
    }
}
