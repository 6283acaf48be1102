//! In-memory list repository.
//!
//! Same semantics as the Postgres adapter, including version checks, so
//! handler and HTTP tests exercise the real concurrency rules. Used when no
//! database URL is configured outside production.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ListId, OwnedByUser, Timestamp, UserId};
use crate::domain::list::DecisionList;
use crate::domain::sharing::ShareToken;
use crate::ports::ListRepository;

/// Document store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryListRepository {
    lists: RwLock<HashMap<ListId, DecisionList>>,
}

impl InMemoryListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lists.
    pub async fn len(&self) -> usize {
        self.lists.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lists.read().await.is_empty()
    }
}

fn not_found(id: &ListId) -> DomainError {
    DomainError::new(ErrorCode::ListNotFound, "List not found").with_detail("list_id", id.to_string())
}

fn token_taken_by_other(
    lists: &HashMap<ListId, DecisionList>,
    list: &DecisionList,
) -> bool {
    match list.share_token() {
        Some(token) => lists
            .values()
            .any(|other| other.id() != list.id() && other.share_token() == Some(token)),
        None => false,
    }
}

#[async_trait]
impl ListRepository for InMemoryListRepository {
    async fn save(&self, list: &DecisionList) -> Result<(), DomainError> {
        let mut lists = self.lists.write().await;
        if lists.contains_key(&list.id()) {
            return Err(DomainError::new(ErrorCode::Conflict, "List already exists")
                .with_detail("list_id", list.id().to_string()));
        }
        if token_taken_by_other(&lists, list) {
            return Err(DomainError::new(ErrorCode::Conflict, "Share token already in use"));
        }
        lists.insert(list.id(), list.clone());
        Ok(())
    }

    async fn update(&self, list: &DecisionList) -> Result<u64, DomainError> {
        let mut lists = self.lists.write().await;
        let stored_version = lists
            .get(&list.id())
            .map(DecisionList::version)
            .ok_or_else(|| not_found(&list.id()))?;

        if stored_version != list.version() {
            return Err(DomainError::new(ErrorCode::Conflict, "List was modified concurrently")
                .with_detail("list_id", list.id().to_string())
                .with_detail("expected_version", list.version().to_string())
                .with_detail("actual_version", stored_version.to_string()));
        }
        if token_taken_by_other(&lists, list) {
            return Err(DomainError::new(ErrorCode::Conflict, "Share token already in use"));
        }

        let next = stored_version + 1;
        let mut stored = list.clone();
        stored.set_version(next);
        lists.insert(list.id(), stored);
        Ok(next)
    }

    async fn find_by_id(&self, id: &ListId) -> Result<Option<DecisionList>, DomainError> {
        Ok(self.lists.read().await.get(id).cloned())
    }

    async fn find_by_share_token(
        &self,
        token: &ShareToken,
    ) -> Result<Option<DecisionList>, DomainError> {
        Ok(self
            .lists
            .read()
            .await
            .values()
            .find(|l| l.share_token() == Some(token))
            .cloned())
    }

    async fn find_by_owner(
        &self,
        owner: &UserId,
        include_archived: bool,
    ) -> Result<Vec<DecisionList>, DomainError> {
        let mut found: Vec<DecisionList> = self
            .lists
            .read()
            .await
            .values()
            .filter(|l| l.is_owner(owner) && (include_archived || !l.is_archived()))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(found)
    }

    async fn find_upcoming_reminders(
        &self,
        owner: &UserId,
        after: &Timestamp,
    ) -> Result<Vec<DecisionList>, DomainError> {
        let mut found: Vec<DecisionList> = self
            .lists
            .read()
            .await
            .values()
            .filter(|l| l.is_owner(owner) && l.reminder().is_due_after(after))
            .cloned()
            .collect();
        found.sort_by_key(|l| l.reminder().date);
        Ok(found)
    }

    async fn delete(&self, id: &ListId) -> Result<(), DomainError> {
        self.lists
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
