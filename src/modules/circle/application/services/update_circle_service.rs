use async_trait::async_trait;

use crate::circle::application::domain::policies::{is_circle_active, is_circle_admin};
use crate::circle::application::ports::{
    incoming::use_cases::{
        create_circle::SLUG_TAKEN, UpdateCircleCommand, UpdateCircleError, UpdateCircleUseCase,
    },
    outgoing::{CircleQuery, CircleRepository, CircleRepositoryError, CircleSummary},
};
use crate::shared::{permissions::check_all, validation::FieldErrors};

#[derive(Debug, Clone)]
pub struct UpdateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateCircleUseCase for UpdateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCircleCommand,
    ) -> Result<CircleSummary, UpdateCircleError> {
        let circle = self
            .query
            .find_by_slug(command.slug_name())
            .await
            .map_err(|e| UpdateCircleError::RepositoryError(e.to_string()))?
            .filter(|circle| circle.is_active)
            .ok_or(UpdateCircleError::CircleNotFound)?;

        let membership = self
            .query
            .find_subscription(command.requester(), circle.id)
            .await
            .map_err(|e| UpdateCircleError::RepositoryError(e.to_string()))?;

        check_all([is_circle_active(&circle), is_circle_admin(membership.as_ref())])
            .map_err(UpdateCircleError::Forbidden)?;

        let circle = if command.changes().is_empty() {
            circle
        } else {
            self.repository
                .update_circle(circle.id, command.changes().clone())
                .await
                .map_err(|e| match e {
                    CircleRepositoryError::SlugAlreadyExists => UpdateCircleError::Validation(
                        FieldErrors::single("slug_name", SLUG_TAKEN),
                    ),
                    CircleRepositoryError::NotFound => UpdateCircleError::CircleNotFound,
                    other => UpdateCircleError::RepositoryError(other.to_string()),
                })?
        };

        self.query
            .summary(&circle)
            .await
            .map_err(|e| UpdateCircleError::RepositoryError(e.to_string()))
    }
}
