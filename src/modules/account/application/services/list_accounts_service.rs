use async_trait::async_trait;

use crate::account::application::ports::{
    incoming::use_cases::{ListAccountsError, ListAccountsUseCase},
    outgoing::{AccountListFilter, AccountQuery, AccountSummary},
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct ListAccountsService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListAccountsService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAccountsUseCase for ListAccountsService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListAccountsError> {
        self.query
            .list_summaries(filter, page)
            .await
            .map_err(|e| ListAccountsError::RepositoryError(e.to_string()))
    }
}
