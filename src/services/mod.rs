pub mod group_service;
pub mod notification_service;
pub mod permission;

pub use group_service::{GroupError, GroupService};
pub use notification_service::{NotificationError, NotificationService};
pub use permission::has_group_permission;
