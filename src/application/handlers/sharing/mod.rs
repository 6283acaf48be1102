//! Sharing command and query handlers.

mod get_public_list;
mod share_list;
mod update_permissions;

pub use get_public_list::{GetPublicListHandler, GetPublicListQuery};
pub use share_list::{ShareListCommand, ShareListHandler};
pub use update_permissions::{UpdatePermissionsCommand, UpdatePermissionsHandler};
