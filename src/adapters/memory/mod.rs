//! In-memory adapters for tests and local development.

mod list_repository;

pub use list_repository::InMemoryListRepository;
