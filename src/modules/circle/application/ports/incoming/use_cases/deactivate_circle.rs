use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::shared::permissions::Denial;

#[derive(Debug, Clone)]
pub struct DeactivateCircleCommand {
    pub requester: UserId,
    pub slug_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeactivateCircleError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeactivateCircleUseCase: Send + Sync {
    async fn execute(&self, command: DeactivateCircleCommand) -> Result<(), DeactivateCircleError>;
}
