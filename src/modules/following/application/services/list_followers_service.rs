use async_trait::async_trait;

use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::following::application::ports::{
    incoming::use_cases::{ListFollowersError, ListFollowersUseCase},
    outgoing::FollowingQuery,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListFollowersService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    query: Q,
    accounts: AccountResolver,
}

impl<Q> ListFollowersService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    pub fn new(query: Q, accounts: AccountResolver) -> Self {
        Self { query, accounts }
    }
}

#[async_trait]
impl<Q> ListFollowersUseCase for ListFollowersService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListFollowersError> {
        let account = self
            .accounts
            .active_by_username(username)
            .await
            .map_err(|e| match e {
                ResolveAccountError::NotFound => ListFollowersError::AccountNotFound,
                ResolveAccountError::RepositoryError(msg) => {
                    ListFollowersError::RepositoryError(msg)
                }
            })?;

        self.query
            .list_followers(account.id, page)
            .await
            .map_err(|e| ListFollowersError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::account::application::services::mocks::MockAccountQuery;
    use crate::following::application::domain::policies::test_fixtures::following;
    use crate::following::application::services::mocks::MockFollowingQuery;

    #[tokio::test]
    async fn lists_accounts_following_user() {
        let (ana, bob, cid) = (account("ana"), account("bob"), account("cid"));
        let accounts = vec![ana.clone(), bob.clone(), cid.clone()];
        let service = ListFollowersService::new(
            MockFollowingQuery::new(
                accounts.clone(),
                vec![following(cid.id, ana.id), following(ana.id, bob.id)],
            ),
            AccountResolver::new(Arc::new(MockAccountQuery::with(accounts))),
        );

        let page = service.execute("ana", PageRequest::default()).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].username, "cid");
    }
}
