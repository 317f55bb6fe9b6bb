use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::shared::permissions::Denial;

#[derive(Debug, Clone)]
pub struct UnfollowCommand {
    pub requester: UserId,
    pub username: String,
    pub followed: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnfollowError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Following not found")]
    FollowingNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UnfollowUseCase: Send + Sync {
    async fn execute(&self, command: UnfollowCommand) -> Result<(), UnfollowError>;
}
