use async_trait::async_trait;
use tracing::debug;

use crate::circle::application::ports::{
    incoming::use_cases::{SubscribeCommand, SubscribeError, SubscribeUseCase},
    outgoing::{CircleQuery, CircleRepository, CircleRepositoryError, SubscriptionDetail},
};

pub struct SubscribeService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> SubscribeService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> SubscribeUseCase for SubscribeService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    async fn execute(&self, command: SubscribeCommand) -> Result<SubscriptionDetail, SubscribeError> {
        let circle = self
            .query
            .find_by_slug(&command.slug_name)
            .await
            .map_err(|e| SubscribeError::RepositoryError(e.to_string()))?
            .filter(|circle| circle.is_active)
            .ok_or(SubscribeError::CircleNotFound)?;

        let subscription = self
            .repository
            .create_subscription(command.requester, circle.id, false)
            .await
            .map_err(|e| match e {
                CircleRepositoryError::SubscriptionAlreadyExists => SubscribeError::AlreadyExists,
                other => SubscribeError::RepositoryError(other.to_string()),
            })?;

        debug!(circle = %circle.slug_name, user_id = %command.requester, "Subscribed to circle");

        self.query
            .subscription_detail(&subscription)
            .await
            .map_err(|e| SubscribeError::RepositoryError(e.to_string()))
    }
}
