use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::ports::outgoing::SubscriptionDetail;

#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    pub requester: UserId,
    pub slug_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("This subscription already exists.")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    async fn execute(&self, command: SubscribeCommand) -> Result<SubscriptionDetail, SubscribeError>;
}
