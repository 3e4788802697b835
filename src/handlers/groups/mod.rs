mod join;
mod list;
mod my;
mod posts_get;
mod posts_post;
mod search;
mod show;

pub use join::group_join;
pub use list::group_list;
pub use my::group_my;
pub use posts_get::post_list;
pub use posts_post::post_create;
pub use search::group_search;
pub use show::group_show;
