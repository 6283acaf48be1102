//! GetListHandler - Query handler for loading a single owned list.

use std::sync::Arc;

use crate::domain::foundation::{ListId, OwnedByUser, UserId};
use crate::domain::list::{DecisionList, ListError};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct GetListQuery {
    pub list_id: ListId,
    pub user_id: UserId,
}

pub struct GetListHandler {
    repository: Arc<dyn ListRepository>,
}

impl GetListHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetListQuery) -> Result<DecisionList, ListError> {
        let list = self
            .repository
            .find_by_id(&query.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(query.list_id))?;

        list.check_ownership(&query.user_id)?;
        Ok(list)
    }
}
