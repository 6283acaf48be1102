//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ListRepository` - Document storage for decision lists
//! - `SessionValidator` - Bearer token validation

mod list_repository;
mod session_validator;

pub use list_repository::ListRepository;
pub use session_validator::SessionValidator;
