mod follow;
mod get_following;
mod list_followers;
mod list_follows;
mod unfollow;

pub use follow::follow_handler;
pub use get_following::get_following_handler;
pub use list_followers::list_followers_handler;
pub use list_follows::list_follows_handler;
pub use unfollow::unfollow_handler;
pub use follow::__path_follow_handler;
pub use get_following::__path_get_following_handler;
pub use list_followers::__path_list_followers_handler;
pub use list_follows::__path_list_follows_handler;
pub use unfollow::__path_unfollow_handler;
