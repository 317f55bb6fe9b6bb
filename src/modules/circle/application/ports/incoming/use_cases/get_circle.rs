use async_trait::async_trait;

use crate::circle::application::ports::outgoing::CircleDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCircleError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCircleUseCase: Send + Sync {
    async fn execute(&self, slug_name: &str) -> Result<CircleDetail, GetCircleError>;
}
