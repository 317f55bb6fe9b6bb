use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::following::application::ports::outgoing::FollowingDetail;

#[derive(Debug, Clone)]
pub struct FollowCommand {
    pub requester: UserId,
    /// Account to follow.
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("A user cannot follow yourself.")]
    SelfFollow,

    #[error("This following already exist.")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FollowUseCase: Send + Sync {
    async fn execute(&self, command: FollowCommand) -> Result<FollowingDetail, FollowError>;
}
