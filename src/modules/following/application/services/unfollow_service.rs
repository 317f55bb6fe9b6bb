use async_trait::async_trait;

use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::following::application::domain::policies::is_following_owner;
use crate::following::application::ports::{
    incoming::use_cases::{UnfollowCommand, UnfollowError, UnfollowUseCase},
    outgoing::{FollowingQuery, FollowingRepository, FollowingRepositoryError},
};

pub struct UnfollowService<R, Q>
where
    R: FollowingRepository + Send + Sync,
    Q: FollowingQuery + Send + Sync,
{
    repository: R,
    query: Q,
    accounts: AccountResolver,
}

impl<R, Q> UnfollowService<R, Q>
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

fn resolve_error(e: ResolveAccountError) -> UnfollowError {
    match e {
        ResolveAccountError::NotFound => UnfollowError::AccountNotFound,
        ResolveAccountError::RepositoryError(msg) => UnfollowError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R, Q> UnfollowUseCase for UnfollowService<R, Q>
where
    R: FollowingRepository + Send + Sync,
    Q: FollowingQuery + Send + Sync,
{
    async fn execute(&self, command: UnfollowCommand) -> Result<(), UnfollowError> {
        let follower = self
            .accounts
            .active_by_username(&command.username)
            .await
            .map_err(resolve_error)?;
        let followed = self
            .accounts
            .active_by_username(&command.followed)
            .await
            .map_err(resolve_error)?;

        let following = self
            .query
            .find(follower.id, followed.id)
            .await
            .map_err(|e| UnfollowError::RepositoryError(e.to_string()))?
            .ok_or(UnfollowError::FollowingNotFound)?;

        is_following_owner(command.requester, &following).map_err(UnfollowError::Forbidden)?;

        self.repository
            .delete_following(following.id)
            .await
            .map_err(|e| match e {
                FollowingRepositoryError::NotFound => UnfollowError::FollowingNotFound,
                other => UnfollowError::RepositoryError(other.to_string()),
            })
    }
}
