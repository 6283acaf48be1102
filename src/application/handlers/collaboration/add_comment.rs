//! AddCommentHandler - Command handler for commenting on a list.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::modify_list;
use crate::domain::collaboration::Comment;
use crate::domain::foundation::{AuthenticatedUser, ListId, OwnedByUser};
use crate::domain::list::ListError;
use crate::domain::sharing::{CallerIdentity, ClientOrigin};
use crate::ports::ListRepository;

/// Command to add a comment. `user` is `None` for anonymous visitors.
#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub list_id: ListId,
    pub user: Option<AuthenticatedUser>,
    pub origin: ClientOrigin,
    pub author_name: Option<String>,
    pub text: String,
}

pub struct AddCommentHandler {
    repository: Arc<dyn ListRepository>,
}

impl AddCommentHandler {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddCommentCommand) -> Result<Comment, ListError> {
        let (list, comment) = modify_list(self.repository.as_ref(), &cmd.list_id, |list| {
            let caller =
                CallerIdentity::resolve(cmd.user.clone(), cmd.origin.clone(), list.owner_id());
            list.add_comment(&caller, cmd.author_name.as_deref(), &cmd.text)
                .cloned()
        })
        .await?;

        info!(list_id = %list.id(), comment_id = %comment.id(), owner = comment.is_owner(), "comment added");
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryListRepository;
    use crate::application::handlers::test_support::{saved_list, user};
    use crate::domain::sharing::PermissionsUpdate;

    fn command(list_id: ListId, user: Option<AuthenticatedUser>) -> AddCommentCommand {
        AddCommentCommand {
            list_id,
            user,
            origin: ClientOrigin::new("203.0.113.9"),
            author_name: None,
            text: "Have you thought about the commute?".to_string(),
        }
    }

    #[tokio::test]
    async fn owner_comment_is_flagged() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        let handler = AddCommentHandler::new(repo.clone());

        let comment = handler
            .handle(command(list.id(), Some(user("owner"))))
            .await
            .unwrap();
        assert!(comment.is_owner());

        let stored = repo.find_by_id(&list.id()).await.unwrap().unwrap();
        assert_eq!(stored.comments().len(), 1);
    }

    #[tokio::test]
    async fn anonymous_comment_on_private_list_is_not_found() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        let handler = AddCommentHandler::new(repo);

        let err = handler.handle(command(list.id(), None)).await.unwrap_err();
        assert!(matches!(err, ListError::NotFound(_)));
    }

    #[tokio::test]
    async fn anonymous_comment_on_public_list() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        modify_list(repo.as_ref(), &list.id(), |l| {
            l.share();
            Ok(())
        })
        .await
        .unwrap();
        let handler = AddCommentHandler::new(repo);

        let comment = handler.handle(command(list.id(), None)).await.unwrap();
        assert_eq!(comment.author_name(), "Anonymous");
        assert!(comment.user_id().is_none());
        assert!(!comment.is_owner());
    }

    #[tokio::test]
    async fn require_name_rejects_nameless_anonymous() {
        let repo = Arc::new(InMemoryListRepository::new());
        let list = saved_list(repo.as_ref(), "owner").await;
        modify_list(repo.as_ref(), &list.id(), |l| {
            l.share();
            l.update_permissions(PermissionsUpdate {
                require_name: Some(true),
                ..Default::default()
            });
            Ok(())
        })
        .await
        .unwrap();
        let handler = AddCommentHandler::new(repo);

        let err = handler.handle(command(list.id(), None)).await.unwrap_err();
        assert!(matches!(err, ListError::ValidationFailed { .. }));

        let ok = handler
            .handle(AddCommentCommand {
                author_name: Some("Priya".to_string()),
                ..command(list.id(), None)
            })
            .await
            .unwrap();
        assert_eq!(ok.author_name(), "Priya");
    }
}
