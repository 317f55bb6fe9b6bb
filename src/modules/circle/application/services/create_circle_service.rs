use async_trait::async_trait;
use tracing::debug;

use crate::circle::application::ports::{
    incoming::use_cases::{
        create_circle::SLUG_TAKEN, CreateCircleCommand, CreateCircleError, CreateCircleUseCase,
    },
    outgoing::{CircleQuery, CircleRepository, CircleRepositoryError, CircleSummary},
};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone)]
pub struct CreateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateCircleUseCase for CreateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCircleCommand,
    ) -> Result<CircleSummary, CreateCircleError> {
        let circle = self
            .repository
            .create_circle(command.requester(), command.data().clone())
            .await
            .map_err(|e| match e {
                CircleRepositoryError::SlugAlreadyExists => {
                    CreateCircleError::Validation(FieldErrors::single("slug_name", SLUG_TAKEN))
                }
                other => CreateCircleError::RepositoryError(other.to_string()),
            })?;

        debug!(slug_name = %circle.slug_name, admin = %command.requester(), "Circle stored");

        self.query
            .summary(&circle)
            .await
            .map_err(|e| CreateCircleError::RepositoryError(e.to_string()))
    }
}
