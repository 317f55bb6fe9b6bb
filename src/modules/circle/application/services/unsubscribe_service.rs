use async_trait::async_trait;

use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::circle::application::domain::policies::is_subscription_owner;
use crate::circle::application::ports::{
    incoming::use_cases::{UnsubscribeCommand, UnsubscribeError, UnsubscribeUseCase},
    outgoing::{CircleQuery, CircleRepository, CircleRepositoryError},
};

pub struct UnsubscribeService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    repository: R,
    query: Q,
    accounts: AccountResolver,
}

impl<R, Q> UnsubscribeService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, accounts: AccountResolver) -> Self {
        Self {
            repository,
            query,
            accounts,
        }
    }
}

#[async_trait]
impl<R, Q> UnsubscribeUseCase for UnsubscribeService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    async fn execute(&self, command: UnsubscribeCommand) -> Result<(), UnsubscribeError> {
        let circle = self
            .query
            .find_by_slug(&command.slug_name)
            .await
            .map_err(|e| UnsubscribeError::RepositoryError(e.to_string()))?
            .filter(|circle| circle.is_active)
            .ok_or(UnsubscribeError::CircleNotFound)?;

        let member = self
            .accounts
            .active_by_username(&command.username)
            .await
            .map_err(|e| match e {
                ResolveAccountError::NotFound => UnsubscribeError::AccountNotFound,
                ResolveAccountError::RepositoryError(msg) => UnsubscribeError::RepositoryError(msg),
            })?;

        let subscription = self
            .query
            .find_subscription(member.id, circle.id)
            .await
            .map_err(|e| UnsubscribeError::RepositoryError(e.to_string()))?
            .ok_or(UnsubscribeError::SubscriptionNotFound)?;

        is_subscription_owner(command.requester, &subscription)
            .map_err(UnsubscribeError::Forbidden)?;

        self.repository
            .delete_subscription(subscription.id)
            .await
            .map_err(|e| match e {
                CircleRepositoryError::NotFound => UnsubscribeError::SubscriptionNotFound,
                other => UnsubscribeError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::account::application::domain::entities::Account;
    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::account::application::services::mocks::MockAccountQuery;
    use crate::circle::application::domain::policies::test_fixtures::{circle, subscription};
    use crate::circle::application::domain::policies::NOT_SUBSCRIPTION_OWNER;
    use crate::circle::application::services::mocks::{MockCircleQuery, MockCircleRepository};

    fn command(requester: &Account) -> UnsubscribeCommand {
        UnsubscribeCommand {
            requester: requester.id,
            slug_name: "quito".to_string(),
            username: "ana".to_string(),
        }
    }

    #[tokio::test]
    async fn member_leaves_circle() {
        let (ana, bob) = (account("ana"), account("bob"));
        let c = circle("quito");
        let sub = subscription(ana.id, &c, false);
        let service = UnsubscribeService::new(
            MockCircleRepository::default(),
            MockCircleQuery::with(vec![c], vec![sub.clone()]),
            AccountResolver::new(Arc::new(MockAccountQuery::with(vec![ana.clone(), bob]))),
        );

        service.execute(command(&ana)).await.unwrap();

        assert_eq!(*service.repository.unsubscribed.lock().unwrap(), vec![sub.id]);
    }

    #[tokio::test]
    async fn other_user_cannot_remove_subscription() {
        let (ana, bob) = (account("ana"), account("bob"));
        let c = circle("quito");
        let service = UnsubscribeService::new(
            MockCircleRepository::default(),
            MockCircleQuery::with(vec![c.clone()], vec![subscription(ana.id, &c, false)]),
            AccountResolver::new(Arc::new(MockAccountQuery::with(vec![ana, bob.clone()]))),
        );

        let result = service.execute(command(&bob)).await;

        assert!(matches!(result, Err(UnsubscribeError::Forbidden(d)) if d == NOT_SUBSCRIPTION_OWNER));
        assert!(service.repository.unsubscribed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_subscription_is_not_found() {
        let ana = account("ana");
        let service = UnsubscribeService::new(
            MockCircleRepository::default(),
            MockCircleQuery::with(vec![circle("quito")], vec![]),
            AccountResolver::new(Arc::new(MockAccountQuery::with(vec![ana.clone()]))),
        );

        let result = service.execute(command(&ana)).await;

        assert!(matches!(result, Err(UnsubscribeError::SubscriptionNotFound)));
    }
}
