//! HTTP adapter for decision lists.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ListApiError, ListsAppState};
pub use routes::list_routes;
