//! PostgreSQL implementation of ListRepository.
//!
//! Each list is one row: the serialized aggregate in `document` plus the
//! columns that lookups filter on. `version` guards every update.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ListId, OwnedByUser, Timestamp, UserId};
use crate::domain::list::DecisionList;
use crate::domain::sharing::ShareToken;
use crate::ports::ListRepository;

/// Postgres error code for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

const SELECT_COLUMNS: &str = "SELECT document, version FROM decision_lists";

/// PostgreSQL implementation of ListRepository.
#[derive(Clone)]
pub struct PostgresListRepository {
    pool: PgPool,
}

impl PostgresListRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Applies embedded migrations from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to run migrations: {}", e),
            )
        })
}

fn db_error(action: &str, err: sqlx::Error) -> DomainError {
    let unique = err
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION);
    if unique {
        return DomainError::new(ErrorCode::Conflict, "Share token already in use");
    }
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", action, err),
    )
}

fn not_found(id: &ListId) -> DomainError {
    DomainError::new(ErrorCode::ListNotFound, "List not found").with_detail("list_id", id.to_string())
}

fn to_document(list: &DecisionList) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(list).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to serialize list: {}", e),
        )
    })
}

fn row_to_list(row: PgRow) -> Result<DecisionList, DomainError> {
    let document: serde_json::Value = row
        .try_get("document")
        .map_err(|e| db_error("read document column", e))?;
    let version: i64 = row
        .try_get("version")
        .map_err(|e| db_error("read version column", e))?;

    let mut list: DecisionList = serde_json::from_value(document).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Corrupt list document: {}", e),
        )
    })?;
    list.set_version(u64::try_from(version).unwrap_or_default());
    Ok(list)
}

fn version_param(list: &DecisionList) -> Result<i64, DomainError> {
    i64::try_from(list.version())
        .map_err(|_| DomainError::new(ErrorCode::InternalError, "List version overflow"))
}

#[async_trait]
impl ListRepository for PostgresListRepository {
    async fn save(&self, list: &DecisionList) -> Result<(), DomainError> {
        let document = to_document(list)?;
        let reminder = list.reminder();

        let result = sqlx::query(
            r#"
            INSERT INTO decision_lists (
                id, owner_id, share_token, is_public, archived,
                reminder_enabled, reminder_at, version, document,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(list.id().as_uuid())
        .bind(list.owner_id().as_str())
        .bind(list.share_token().map(ShareToken::as_str))
        .bind(list.is_public())
        .bind(list.is_archived())
        .bind(reminder.enabled)
        .bind(reminder.date.as_ref().map(Timestamp::as_datetime))
        .bind(version_param(list)?)
        .bind(&document)
        .bind(list.created_at().as_datetime())
        .bind(list.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert list", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::Conflict, "List already exists")
                .with_detail("list_id", list.id().to_string()));
        }
        Ok(())
    }

    async fn update(&self, list: &DecisionList) -> Result<u64, DomainError> {
        let document = to_document(list)?;
        let reminder = list.reminder();
        let expected = version_param(list)?;

        let result = sqlx::query(
            r#"
            UPDATE decision_lists SET
                share_token = $3,
                is_public = $4,
                archived = $5,
                reminder_enabled = $6,
                reminder_at = $7,
                document = $8,
                updated_at = $9,
                version = version + 1
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(list.id().as_uuid())
        .bind(expected)
        .bind(list.share_token().map(ShareToken::as_str))
        .bind(list.is_public())
        .bind(list.is_archived())
        .bind(reminder.enabled)
        .bind(reminder.date.as_ref().map(Timestamp::as_datetime))
        .bind(&document)
        .bind(list.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update list", e))?;

        if result.rows_affected() == 0 {
            let exists: (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM decision_lists WHERE id = $1)")
                    .bind(list.id().as_uuid())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| db_error("check list existence", e))?;
            return Err(if exists.0 {
                DomainError::new(ErrorCode::Conflict, "List was modified concurrently")
                    .with_detail("list_id", list.id().to_string())
            } else {
                not_found(&list.id())
            });
        }

        Ok(list.version() + 1)
    }

    async fn find_by_id(&self, id: &ListId) -> Result<Option<DecisionList>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch list", e))?;

        row.map(row_to_list).transpose()
    }

    async fn find_by_share_token(
        &self,
        token: &ShareToken,
    ) -> Result<Option<DecisionList>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE share_token = $1", SELECT_COLUMNS))
            .bind(token.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch list by share token", e))?;

        row.map(row_to_list).transpose()
    }

    async fn find_by_owner(
        &self,
        owner: &UserId,
        include_archived: bool,
    ) -> Result<Vec<DecisionList>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE owner_id = $1 AND ($2 OR NOT archived) ORDER BY updated_at DESC",
            SELECT_COLUMNS
        ))
        .bind(owner.as_str())
        .bind(include_archived)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch lists by owner", e))?;

        rows.into_iter().map(row_to_list).collect()
    }

    async fn find_upcoming_reminders(
        &self,
        owner: &UserId,
        after: &Timestamp,
    ) -> Result<Vec<DecisionList>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE owner_id = $1 AND reminder_enabled AND reminder_at > $2 ORDER BY reminder_at ASC",
            SELECT_COLUMNS
        ))
        .bind(owner.as_str())
        .bind(after.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch upcoming reminders", e))?;

        rows.into_iter().map(row_to_list).collect()
    }

    async fn delete(&self, id: &ListId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM decision_lists WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete list", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
