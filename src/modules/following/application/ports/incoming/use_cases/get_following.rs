use async_trait::async_trait;

use crate::following::application::ports::outgoing::FollowingDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFollowingError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Following not found")]
    FollowingNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetFollowingUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        followed: &str,
    ) -> Result<FollowingDetail, GetFollowingError>;
}
