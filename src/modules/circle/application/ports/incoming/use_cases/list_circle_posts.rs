use async_trait::async_trait;

use crate::post::application::ports::outgoing::PostCard;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCirclePostsError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCirclePostsUseCase: Send + Sync {
    async fn execute(
        &self,
        slug_name: &str,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListCirclePostsError>;
}
