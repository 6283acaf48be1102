//! UpdatePermissionsHandler - Command handler for sharing permissions.

use std::sync::Arc;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::{DecisionList, ListError};
use crate::domain::sharing::PermissionsUpdate;
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct UpdatePermissionsCommand {
    pub list_id: ListId,
    pub user_id: UserId,
    pub update: PermissionsUpdate,
}

pub struct UpdatePermissionsHandler {
    repository: Arc<dyn ListRepository>,
}

impl UpdatePermissionsHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdatePermissionsCommand) -> Result<DecisionList, ListError> {
        let (list, ()) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&cmd.user_id)?;
            list.update_permissions(cmd.update);
            Ok(())
        })
        .await?;
        Ok(list)
    }
}
