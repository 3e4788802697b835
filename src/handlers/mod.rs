pub mod groups;
pub mod notifications;
