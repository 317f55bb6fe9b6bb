use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::shared::permissions::Denial;

#[derive(Debug, Clone)]
pub struct DeactivateAccountCommand {
    pub requester: UserId,
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeactivateAccountError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeactivateAccountUseCase: Send + Sync {
    async fn execute(&self, command: DeactivateAccountCommand)
        -> Result<(), DeactivateAccountError>;
}
