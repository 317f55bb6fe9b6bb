use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::ports::outgoing::PostDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<PostDetail, GetPostError>;
}
