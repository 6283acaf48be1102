//! Optimistic read-modify-write for list documents.

use tracing::debug;

use crate::domain::foundation::{ErrorCode, ListId};
use crate::domain::list::{DecisionList, ListError};
use crate::ports::ListRepository;

/// Attempts per write before a version conflict is surfaced.
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Loads a list, applies `mutate` and writes it back.
///
/// On a version conflict the list is reloaded and `mutate` runs again on
/// the fresh copy, so `mutate` must be safe to repeat. Errors from
/// `mutate` abort without writing.
///
/// # Errors
///
/// - `NotFound` if the list does not exist
/// - whatever `mutate` returns
/// - `Conflict` after `MAX_WRITE_ATTEMPTS` conflicting writes
pub async fn modify_list<T, F>(
    repo: &dyn ListRepository,
    id: &ListId,
    mut mutate: F,
) -> Result<(DecisionList, T), ListError>
where
    F: FnMut(&mut DecisionList) -> Result<T, ListError> + Send,
    T: Send,
{
    let mut attempt = 1;
    loop {
        let mut list = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ListError::not_found(*id))?;

        let value = mutate(&mut list)?;

        match repo.update(&list).await {
            Ok(version) => {
                list.set_version(version);
                return Ok((list, value));
            }
            Err(err) if err.code == ErrorCode::Conflict && attempt < MAX_WRITE_ATTEMPTS => {
                debug!(list_id = %id, attempt, "version conflict, retrying write");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
