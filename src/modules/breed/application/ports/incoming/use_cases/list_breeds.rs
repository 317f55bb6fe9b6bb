use async_trait::async_trait;

use crate::breed::application::ports::outgoing::{BreedListFilter, BreedView};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBreedsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListBreedsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: BreedListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BreedView>, ListBreedsError>;
}
