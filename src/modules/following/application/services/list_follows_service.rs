use async_trait::async_trait;

use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::following::application::ports::{
    incoming::use_cases::{ListFollowsError, ListFollowsUseCase},
    outgoing::FollowingQuery,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListFollowsService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    query: Q,
    accounts: AccountResolver,
}

impl<Q> ListFollowsService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    pub fn new(query: Q, accounts: AccountResolver) -> Self {
        Self { query, accounts }
    }
}

#[async_trait]
impl<Q> ListFollowsUseCase for ListFollowsService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListFollowsError> {
        let account = self
            .accounts
            .active_by_username(username)
            .await
            .map_err(|e| match e {
                ResolveAccountError::NotFound => ListFollowsError::AccountNotFound,
                ResolveAccountError::RepositoryError(msg) => ListFollowsError::RepositoryError(msg),
            })?;

        self.query
            .list_follows(account.id, page)
            .await
            .map_err(|e| ListFollowsError::RepositoryError(e.to_string()))
    }
}
