pub mod post_query;
pub mod post_repository;

pub use post_query::{
    CommentView, PostCard, PostDetail, PostListFilter, PostQuery, PostQueryError,
};
pub use post_repository::{NewComment, NewPost, PostChanges, PostRepository, PostRepositoryError};
