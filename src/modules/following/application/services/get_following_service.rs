use async_trait::async_trait;

use crate::account::application::domain::entities::Account;
use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::following::application::ports::{
    incoming::use_cases::{GetFollowingError, GetFollowingUseCase},
    outgoing::{FollowingDetail, FollowingQuery},
};

pub struct GetFollowingService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    query: Q,
    accounts: AccountResolver,
}

impl<Q> GetFollowingService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    pub fn new(query: Q, accounts: AccountResolver) -> Self {
        Self { query, accounts }
    }

    async fn resolve(&self, username: &str) -> Result<Account, GetFollowingError> {
        self.accounts
            .active_by_username(username)
            .await
            .map_err(|e| match e {
                ResolveAccountError::NotFound => GetFollowingError::AccountNotFound,
                ResolveAccountError::RepositoryError(msg) => GetFollowingError::RepositoryError(msg),
            })
    }
}

#[async_trait]
impl<Q> GetFollowingUseCase for GetFollowingService<Q>
where
    Q: FollowingQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        followed: &str,
    ) -> Result<FollowingDetail, GetFollowingError> {
        let follower = self.resolve(username).await?;
        let followed = self.resolve(followed).await?;

        let following = self
            .query
            .find(follower.id, followed.id)
            .await
            .map_err(|e| GetFollowingError::RepositoryError(e.to_string()))?
            .ok_or(GetFollowingError::FollowingNotFound)?;

        self.query
            .detail(&following)
            .await
            .map_err(|e| GetFollowingError::RepositoryError(e.to_string()))
    }
}
