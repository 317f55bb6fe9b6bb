use async_trait::async_trait;

use crate::circle::application::ports::outgoing::{CircleListFilter, CircleSummary};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCirclesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCirclesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: CircleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CircleSummary>, ListCirclesError>;
}
