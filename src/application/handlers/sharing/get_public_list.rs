//! GetPublicListHandler - Query handler for reading a list by share token.

use std::sync::Arc;

use tracing::debug;

use crate::domain::list::{DecisionList, ListError};
use crate::domain::sharing::ShareToken;
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct GetPublicListQuery {
    pub token: String,
}

/// Resolves a share token to a public list.
///
/// Unknown tokens, malformed tokens and tokens of private lists all yield
/// the same `PublicNotFound`.
pub struct GetPublicListHandler {
    repository: Arc<dyn ListRepository>,
}

impl GetPublicListHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPublicListQuery) -> Result<DecisionList, ListError> {
        let token = ShareToken::parse(query.token).map_err(|_| ListError::public_not_found())?;

        match self.repository.find_by_share_token(&token).await? {
            Some(list) if list.is_shared_via(&token) => Ok(list),
            Some(list) => {
                debug!(list_id = %list.id(), "share token matched a private list");
                Err(ListError::public_not_found())
            }
            None => Err(ListError::public_not_found()),
        }
    }
}
