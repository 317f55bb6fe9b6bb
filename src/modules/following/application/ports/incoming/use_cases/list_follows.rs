use async_trait::async_trait;

use crate::account::application::ports::outgoing::AccountSummary;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFollowsError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListFollowsUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListFollowsError>;
}
