//! PostgreSQL adapters.
//!
//! - `PostgresListRepository` - document-per-row list storage with
//!   optimistic versioning

mod list_repository;

pub use list_repository::{run_migrations, PostgresListRepository};
