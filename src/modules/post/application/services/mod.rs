pub mod create_comment_service;
pub mod create_post_service;
pub mod delete_comment_service;
pub mod delete_post_service;
pub mod get_post_service;
pub mod list_account_posts_service;
pub mod list_comments_service;
pub mod list_posts_service;
pub mod post_references;
pub mod update_post_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use create_comment_service::CreateCommentService;
pub use create_post_service::CreatePostService;
pub use delete_comment_service::DeleteCommentService;
pub use delete_post_service::DeletePostService;
pub use get_post_service::GetPostService;
pub use list_account_posts_service::ListAccountPostsService;
pub use list_comments_service::ListCommentsService;
pub use list_posts_service::ListPostsService;
pub use post_references::PostReferences;
pub use update_post_service::UpdatePostService;
