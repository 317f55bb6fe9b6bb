use async_trait::async_trait;

use crate::circle::application::ports::{
    incoming::use_cases::{GetCircleError, GetCircleUseCase},
    outgoing::{CircleDetail, CircleQuery},
};

#[derive(Debug, Clone)]
pub struct GetCircleService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCircleService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCircleUseCase for GetCircleService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    async fn execute(&self, slug_name: &str) -> Result<CircleDetail, GetCircleError> {
        let circle = self
            .query
            .find_by_slug(slug_name)
            .await
            .map_err(|e| GetCircleError::RepositoryError(e.to_string()))?
            .filter(|circle| circle.is_active)
            .ok_or(GetCircleError::CircleNotFound)?;

        self.query
            .detail(&circle)
            .await
            .map_err(|e| GetCircleError::RepositoryError(e.to_string()))
    }
}
