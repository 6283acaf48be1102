//! Ownership trait for user-owned resources.
//!
//! Decision lists have exactly one owner. Owner-scoped operations call
//! `check_ownership()` right after loading the aggregate:
//!
//! ```ignore
//! let list = repo.find_by_id(&id).await?.ok_or(ListError::not_found("List"))?;
//! list.check_ownership(&user_id)?; // Err(Unauthorized) if not owner
//! ```

use super::{DomainError, ErrorCode, UserId};

/// Trait for aggregates that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning an `Unauthorized` error if the user
    /// is not the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Unauthorized,
                "User does not own this resource",
            )
            .with_detail("owner_id", self.owner_id().to_string())
            .with_detail("requested_by", user_id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        owner: UserId,
    }

    impl OwnedByUser for TestResource {
        fn owner_id(&self) -> &UserId {
            &self.owner
        }
    }

    fn test_user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn is_owner_returns_true_for_owner() {
        let owner = test_user("owner-123");
        let resource = TestResource {
            owner: owner.clone(),
        };

        assert!(resource.is_owner(&owner));
    }

    #[test]
    fn check_ownership_fails_for_non_owner() {
        let resource = TestResource {
            owner: test_user("owner-123"),
        };

        let err = resource.check_ownership(&test_user("other-456")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.details.get("owner_id"), Some(&"owner-123".to_string()));
        assert_eq!(
            err.details.get("requested_by"),
            Some(&"other-456".to_string())
        );
    }

    #[test]
    fn check_ownership_succeeds_for_owner() {
        let owner = test_user("owner-123");
        let resource = TestResource {
            owner: owner.clone(),
        };

        assert!(resource.check_ownership(&owner).is_ok());
    }
}
