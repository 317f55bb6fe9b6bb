use async_trait::async_trait;

use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::following::application::ports::{
    incoming::use_cases::{FollowCommand, FollowError, FollowUseCase},
    outgoing::{FollowingDetail, FollowingQuery, FollowingRepository, FollowingRepositoryError},
};

pub struct FollowService<R, Q>
where
    R: FollowingRepository + Send + Sync,
    Q: FollowingQuery + Send + Sync,
{
    repository: R,
    query: Q,
    accounts: AccountResolver,
}

impl<R, Q> FollowService<R, Q>
where
    R: FollowingRepository + Send + Sync,
    Q: FollowingQuery + Send + Sync,
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
impl<R, Q> FollowUseCase for FollowService<R, Q>
where
    R: FollowingRepository + Send + Sync,
    Q: FollowingQuery + Send + Sync,
{
    async fn execute(&self, command: FollowCommand) -> Result<FollowingDetail, FollowError> {
        let target = self
            .accounts
            .active_by_username(&command.username)
            .await
            .map_err(|e| match e {
                ResolveAccountError::NotFound => FollowError::AccountNotFound,
                ResolveAccountError::RepositoryError(msg) => FollowError::RepositoryError(msg),
            })?;

        if target.id == command.requester {
            return Err(FollowError::SelfFollow);
        }

        // The unique index decides duplicates.
        let following = self
            .repository
            .create_following(command.requester, target.id)
            .await
            .map_err(|e| match e {
                FollowingRepositoryError::AlreadyExists => FollowError::AlreadyExists,
                other => FollowError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(followed = %target.username, "Following created");

        self.query
            .detail(&following)
            .await
            .map_err(|e| FollowError::RepositoryError(e.to_string()))
    }
}
