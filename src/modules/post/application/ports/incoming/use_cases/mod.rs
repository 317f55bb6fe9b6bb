pub mod create_comment;
pub mod create_post;
pub mod delete_comment;
pub mod delete_post;
pub mod get_post;
pub mod list_account_posts;
pub mod list_comments;
pub mod list_posts;
pub mod update_post;

pub use create_comment::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase};
pub use create_post::{CreatePostCommand, CreatePostError, CreatePostInput, CreatePostUseCase};
pub use delete_comment::{DeleteCommentCommand, DeleteCommentError, DeleteCommentUseCase};
pub use delete_post::{DeletePostCommand, DeletePostError, DeletePostUseCase};
pub use get_post::{GetPostError, GetPostUseCase};
pub use list_account_posts::{ListAccountPostsError, ListAccountPostsUseCase};
pub use list_comments::{ListCommentsError, ListCommentsUseCase};
pub use list_posts::{ListPostsError, ListPostsUseCase};
pub use update_post::{UpdatePostCommand, UpdatePostError, UpdatePostInput, UpdatePostUseCase};
