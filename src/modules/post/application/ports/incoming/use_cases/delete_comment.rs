use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::shared::permissions::Denial;

#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub requester: UserId,
    pub post_id: Uuid,
    pub comment_id: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, command: DeleteCommentCommand) -> Result<(), DeleteCommentError>;
}
