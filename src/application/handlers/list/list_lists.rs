//! ListListsHandler - Query handler for an owner's lists.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::list::{DecisionList, ListError};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct ListListsQuery {
    pub user_id: UserId,
    /// Include archived lists. Off by default.
    pub include_archived: bool,
}

/// Returns the caller's lists, most recently updated first.
pub struct ListListsHandler {
    repository: Arc<dyn ListRepository>,
}

impl ListListsHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListListsQuery) -> Result<Vec<DecisionList>, ListError> {
        Ok(self
            .repository
            .find_by_owner(&query.user_id, query.include_archived)
            .await?)
    }
}
