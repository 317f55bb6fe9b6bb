use async_trait::async_trait;

use crate::account::application::ports::outgoing::AccountProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<AccountProfile, GetProfileError>;
}
