//! Owner command and query handlers for decision lists.

mod append_timeline_event;
mod create_list;
mod delete_list;
mod duplicate_list;
mod get_list;
mod list_lists;
mod set_reminder;
mod set_status;
mod toggle_archive;
mod upcoming_reminders;
mod update_list;

pub use append_timeline_event::{AppendTimelineEventCommand, AppendTimelineEventHandler};
pub use create_list::{CreateListCommand, CreateListHandler};
pub use delete_list::{DeleteListCommand, DeleteListHandler};
pub use duplicate_list::{DuplicateListCommand, DuplicateListHandler};
pub use get_list::{GetListHandler, GetListQuery};
pub use list_lists::{ListListsHandler, ListListsQuery};
pub use set_reminder::{SetReminderCommand, SetReminderHandler};
pub use set_status::{SetStatusCommand, SetStatusHandler};
pub use toggle_archive::{ToggleArchiveCommand, ToggleArchiveHandler};
pub use upcoming_reminders::{UpcomingRemindersHandler, UpcomingRemindersQuery};
pub use update_list::{UpdateListCommand, UpdateListHandler};
