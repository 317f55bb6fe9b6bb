use async_trait::async_trait;
use uuid::Uuid;

use crate::breed::application::ports::{
    incoming::use_cases::{GetBreedError, GetBreedUseCase},
    outgoing::{BreedQuery, BreedView},
};

#[derive(Debug, Clone)]
pub struct GetBreedService<Q>
where
    Q: BreedQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetBreedService<Q>
where
    Q: BreedQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBreedUseCase for GetBreedService<Q>
where
    Q: BreedQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<BreedView, GetBreedError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| GetBreedError::RepositoryError(e.to_string()))?
            .map(|breed| BreedView::from(&breed))
            .ok_or(GetBreedError::BreedNotFound)
    }
}
