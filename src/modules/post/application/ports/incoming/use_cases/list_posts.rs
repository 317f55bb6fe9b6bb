use async_trait::async_trait;

use crate::post::application::ports::outgoing::{PostCard, PostListFilter};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListPostsError>;
}
