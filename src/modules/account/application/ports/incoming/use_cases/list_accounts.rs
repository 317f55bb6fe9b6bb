use async_trait::async_trait;

use crate::account::application::ports::outgoing::{AccountListFilter, AccountSummary};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAccountsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListAccountsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListAccountsError>;
}
