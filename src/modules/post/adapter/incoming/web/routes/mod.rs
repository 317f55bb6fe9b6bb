mod create_comment;
mod create_post;
mod delete_comment;
mod delete_post;
mod get_post;
mod list_account_posts;
mod list_comments;
mod list_posts;
mod update_post;

pub use create_comment::{create_comment_handler, CreateCommentRequest};
pub use create_post::{create_post_handler, CreatePostRequest};
pub use delete_comment::delete_comment_handler;
pub use delete_post::delete_post_handler;
pub use get_post::get_post_handler;
pub use list_account_posts::list_account_posts_handler;
pub use list_comments::list_comments_handler;
pub use list_posts::list_posts_handler;
pub use update_post::{update_post_handler, UpdatePostRequest};
pub use create_comment::__path_create_comment_handler;
pub use create_post::__path_create_post_handler;
pub use delete_comment::__path_delete_comment_handler;
pub use delete_post::__path_delete_post_handler;
pub use get_post::__path_get_post_handler;
pub use list_account_posts::__path_list_account_posts_handler;
pub use list_comments::__path_list_comments_handler;
pub use list_posts::__path_list_posts_handler;
pub use update_post::__path_update_post_handler;
