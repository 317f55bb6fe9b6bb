use async_trait::async_trait;

use crate::post::application::domain::policies::is_comment_owner;
use crate::post::application::ports::{
    incoming::use_cases::{DeleteCommentCommand, DeleteCommentError, DeleteCommentUseCase},
    outgoing::{PostQuery, PostRepository, PostRepositoryError},
};

pub struct DeleteCommentService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteCommentService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteCommentUseCase for DeleteCommentService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, command: DeleteCommentCommand) -> Result<(), DeleteCommentError> {
        self.query
            .find_by_id(command.post_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::PostNotFound)?;

        let comment = self
            .query
            .find_comment(command.post_id, command.comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::CommentNotFound)?;

        is_comment_owner(command.requester, &comment).map_err(DeleteCommentError::Forbidden)?;

        self.repository
            .delete_comment(comment.id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeleteCommentError::CommentNotFound,
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })
    }
}
