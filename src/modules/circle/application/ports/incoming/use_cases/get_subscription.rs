use async_trait::async_trait;

use crate::circle::application::ports::outgoing::SubscriptionDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSubscriptionError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Subscription not found")]
    SubscriptionNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSubscriptionUseCase: Send + Sync {
    async fn execute(
        &self,
        slug_name: &str,
        username: &str,
    ) -> Result<SubscriptionDetail, GetSubscriptionError>;
}
