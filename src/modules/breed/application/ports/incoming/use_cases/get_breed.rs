use async_trait::async_trait;
use uuid::Uuid;

use crate::breed::application::ports::outgoing::BreedView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBreedError {
    #[error("Breed not found")]
    BreedNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetBreedUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<BreedView, GetBreedError>;
}
