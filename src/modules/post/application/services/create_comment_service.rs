use async_trait::async_trait;
use tracing::debug;

use crate::post::application::ports::{
    incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
    outgoing::{CommentView, PostQuery, PostRepository, PostRepositoryError},
};

pub struct CreateCommentService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateCommentService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateCommentUseCase for CreateCommentService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError> {
        self.query
            .find_by_id(command.post_id())
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::PostNotFound)?;

        let comment = self
            .repository
            .create_comment(command.data().clone())
            .await
            .map_err(|e| match e {
                // The post went away between the lookup and the insert.
                PostRepositoryError::NotFound => CreateCommentError::PostNotFound,
                other => CreateCommentError::RepositoryError(other.to_string()),
            })?;

        debug!(comment_id = %comment.id, post_id = %comment.post_id, "Comment stored");

        self.query
            .comment_view(&comment)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))
    }
}
