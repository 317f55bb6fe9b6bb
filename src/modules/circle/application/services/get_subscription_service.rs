use async_trait::async_trait;

use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::circle::application::ports::{
    incoming::use_cases::{GetSubscriptionError, GetSubscriptionUseCase},
    outgoing::{CircleQuery, SubscriptionDetail},
};

pub struct GetSubscriptionService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    query: Q,
    accounts: AccountResolver,
}

impl<Q> GetSubscriptionService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    pub fn new(query: Q, accounts: AccountResolver) -> Self {
        Self { query, accounts }
    }
}

#[async_trait]
impl<Q> GetSubscriptionUseCase for GetSubscriptionService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    async fn execute(
        &self,
        slug_name: &str,
        username: &str,
    ) -> Result<SubscriptionDetail, GetSubscriptionError> {
        let circle = self
            .query
            .find_by_slug(slug_name)
            .await
            .map_err(|e| GetSubscriptionError::RepositoryError(e.to_string()))?
            .filter(|circle| circle.is_active)
            .ok_or(GetSubscriptionError::CircleNotFound)?;

        let member = self
            .accounts
            .active_by_username(username)
            .await
            .map_err(|e| match e {
                ResolveAccountError::NotFound => GetSubscriptionError::AccountNotFound,
                ResolveAccountError::RepositoryError(msg) => {
                    GetSubscriptionError::RepositoryError(msg)
                }
            })?;

        let subscription = self
            .query
            .find_subscription(member.id, circle.id)
            .await
            .map_err(|e| GetSubscriptionError::RepositoryError(e.to_string()))?
            .ok_or(GetSubscriptionError::SubscriptionNotFound)?;

        self.query
            .subscription_detail(&subscription)
            .await
            .map_err(|e| GetSubscriptionError::RepositoryError(e.to_string()))
    }
}
