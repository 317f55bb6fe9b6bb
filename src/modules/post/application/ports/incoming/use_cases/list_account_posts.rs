use async_trait::async_trait;

use crate::post::application::ports::outgoing::PostCard;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAccountPostsError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListAccountPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListAccountPostsError>;
}
