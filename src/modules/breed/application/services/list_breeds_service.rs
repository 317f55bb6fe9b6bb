use async_trait::async_trait;

use crate::breed::application::ports::{
    incoming::use_cases::{ListBreedsError, ListBreedsUseCase},
    outgoing::{BreedListFilter, BreedQuery, BreedView},
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct ListBreedsService<Q>
where
    Q: BreedQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListBreedsService<Q>
where
    Q: BreedQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListBreedsUseCase for ListBreedsService<Q>
where
    Q: BreedQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: BreedListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BreedView>, ListBreedsError> {
        let breeds = self
            .query
            .list(filter, page)
            .await
            .map_err(|e| ListBreedsError::RepositoryError(e.to_string()))?;

        Ok(breeds.map(|breed| BreedView::from(&breed)))
    }
}
