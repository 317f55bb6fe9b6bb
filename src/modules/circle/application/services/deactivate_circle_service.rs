use async_trait::async_trait;

use crate::circle::application::domain::policies::{is_circle_active, is_circle_admin};
use crate::circle::application::ports::{
    incoming::use_cases::{
        DeactivateCircleCommand, DeactivateCircleError, DeactivateCircleUseCase,
    },
    outgoing::{CircleQuery, CircleRepository, CircleRepositoryError},
};
use crate::shared::permissions::check_all;

#[derive(Debug, Clone)]
pub struct DeactivateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeactivateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeactivateCircleUseCase for DeactivateCircleService<R, Q>
where
    R: CircleRepository + Send + Sync,
    Q: CircleQuery + Send + Sync,
{
    async fn execute(&self, command: DeactivateCircleCommand) -> Result<(), DeactivateCircleError> {
        let circle = self
            .query
            .find_by_slug(&command.slug_name)
            .await
            .map_err(|e| DeactivateCircleError::RepositoryError(e.to_string()))?
            .filter(|circle| circle.is_active)
            .ok_or(DeactivateCircleError::CircleNotFound)?;

        let membership = self
            .query
            .find_subscription(command.requester, circle.id)
            .await
            .map_err(|e| DeactivateCircleError::RepositoryError(e.to_string()))?;

        check_all([is_circle_active(&circle), is_circle_admin(membership.as_ref())])
            .map_err(DeactivateCircleError::Forbidden)?;

        self.repository
            .deactivate_circle(circle.id)
            .await
            .map_err(|e| match e {
                CircleRepositoryError::NotFound => DeactivateCircleError::CircleNotFound,
                other => DeactivateCircleError::RepositoryError(other.to_string()),
            })
    }
}
