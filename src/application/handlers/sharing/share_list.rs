//! ShareListHandler - Command handler for publishing a list.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::modify_list;
use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::ListError;
use crate::domain::sharing::ShareToken;
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct ShareListCommand {
    pub list_id: ListId,
    pub user_id: UserId,
}

/// Makes a list public and returns its share token.
///
/// Repeated calls return the same token.
pub struct ShareListHandler {
    repository: Arc<dyn ListRepository>,
}

impl ShareListHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ShareListCommand) -> Result<ShareToken, ListError> {
        let (list, token) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            list.check_ownership(&cmd.user_id)?;
            Ok(list.share().clone())
        })
        .await?;

        info!(list_id = %list.id(), "list shared");
        Ok(token)
    }
}
