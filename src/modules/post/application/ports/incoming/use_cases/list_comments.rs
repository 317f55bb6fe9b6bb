use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::ports::outgoing::CommentView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentView>, ListCommentsError>;
}
