use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::shared::permissions::Denial;

#[derive(Debug, Clone)]
pub struct UnsubscribeCommand {
    pub requester: UserId,
    pub slug_name: String,
    /// Member whose subscription is removed.
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnsubscribeError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Subscription not found")]
    SubscriptionNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UnsubscribeUseCase: Send + Sync {
    async fn execute(&self, command: UnsubscribeCommand) -> Result<(), UnsubscribeError>;
}
