//! UpcomingRemindersHandler - Query handler for pending follow-ups.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::list::{DecisionList, ListError};
use crate::ports::ListRepository;

#[derive(Debug, Clone)]
pub struct UpcomingRemindersQuery {
    pub user_id: UserId,
}

/// Caller's lists with an enabled reminder in the future, soonest first.
pub struct UpcomingRemindersHandler {
    repository: Arc<dyn ListRepository>,
}

impl UpcomingRemindersHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: UpcomingRemindersQuery) -> Result<Vec<DecisionList>, ListError> {
        Ok(self
            .repository
            .find_upcoming_reminders(&query.user_id, &Timestamp::now())
            .await?)
    }
}
