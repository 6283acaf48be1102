//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - session validators (JWT, mock)
//! - `http` - axum REST API
//! - `memory` - in-memory list store for tests and development
//! - `postgres` - PostgreSQL list store

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use memory::InMemoryListRepository;
pub use postgres::PostgresListRepository;
