//! Decision list repository port.
//!
//! Lists are stored as whole documents. Writers load a list, mutate it
//! and call `update`, which only succeeds if nobody else wrote in between:
//!
//! ```ignore
//! let mut list = repo.find_by_id(&id).await?.ok_or(...)?;
//! list.toggle_archive();
//! repo.update(&list).await?; // Err(Conflict) if the stored version moved on
//! ```

use crate::domain::foundation::{DomainError, ListId, Timestamp, UserId};
use crate::domain::list::DecisionList;
use crate::domain::sharing::ShareToken;
use async_trait::async_trait;

/// Repository port for DecisionList persistence.
///
/// Implementations must:
/// - keep share tokens unique across lists
/// - bump the version on every successful `update`
/// - reject an `update` whose `list.version()` is not the stored version
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Save a new list.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a list with this id already exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, list: &DecisionList) -> Result<(), DomainError>;

    /// Replace an existing list, returning the new version.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if the list doesn't exist
    /// - `Conflict` if the stored version differs from `list.version()`
    /// - `DatabaseError` on persistence failure
    async fn update(&self, list: &DecisionList) -> Result<u64, DomainError>;

    /// Find a list by id.
    async fn find_by_id(&self, id: &ListId) -> Result<Option<DecisionList>, DomainError>;

    /// Find the list holding a share token, public or not.
    async fn find_by_share_token(
        &self,
        token: &ShareToken,
    ) -> Result<Option<DecisionList>, DomainError>;

    /// Lists owned by `owner`, most recently updated first.
    ///
    /// Archived lists are only included when `include_archived` is set.
    async fn find_by_owner(
        &self,
        owner: &UserId,
        include_archived: bool,
    ) -> Result<Vec<DecisionList>, DomainError>;

    /// Owner's lists with an enabled reminder dated after `after`,
    /// soonest first.
    async fn find_upcoming_reminders(
        &self,
        owner: &UserId,
        after: &Timestamp,
    ) -> Result<Vec<DecisionList>, DomainError>;

    /// Delete a list permanently.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if the list doesn't exist
    async fn delete(&self, id: &ListId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ListRepository) {}
    }
}
