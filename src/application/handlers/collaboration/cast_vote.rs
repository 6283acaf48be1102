//! CastVoteHandler - Command handler for item votes.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::modify_list;
use crate::domain::collaboration::{VoteChange, VoteCount, VoteType};
use crate::domain::foundation::{AuthenticatedUser, ItemId, ListId, OwnedByUser};
use crate::domain::list::ListError;
use crate::domain::sharing::{CallerIdentity, ClientOrigin, VoterIdHasher};
use crate::ports::ListRepository;

/// Command to vote on an item. `vote_type: None` removes the caller's vote.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub list_id: ListId,
    pub user: Option<AuthenticatedUser>,
    pub origin: ClientOrigin,
    pub item_id: String,
    pub vote_type: Option<VoteType>,
}

/// Outcome of a vote request.
#[derive(Debug, Clone)]
pub struct CastVoteResult {
    pub change: VoteChange,
    /// Counts for every item on the list.
    pub tally: BTreeMap<ItemId, VoteCount>,
}

pub struct CastVoteHandler {
    repository: Arc<dyn ListRepository>,
    hasher: Arc<VoterIdHasher>,
}

impl CastVoteHandler {
    pub fn new(repository: Arc<dyn ListRepository>, hasher: Arc<VoterIdHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<CastVoteResult, ListError> {
        let item_id = ItemId::new(cmd.item_id)?;
        let hasher = self.hasher.as_ref();

        let (list, change) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            let caller =
                CallerIdentity::resolve(cmd.user.clone(), cmd.origin.clone(), list.owner_id());
            list.vote(&caller, hasher, &item_id, cmd.vote_type)
        })
        .await?;

        debug!(list_id = %list.id(), item_id = %item_id, ?change, "vote applied");
        Ok(CastVoteResult {
            change,
            tally: list.tally(),
        })
    }
}
