pub mod comment;
pub mod group;
pub mod notification;
pub mod photo;
pub mod post;
pub mod rating;
pub mod user;

pub use comment::Comment;
pub use group::{Group, GroupView};
pub use notification::{Notification, NotificationView};
pub use photo::Photo;
pub use post::{NewPost, Post, PostView};
pub use rating::Rating;
pub use user::User;
