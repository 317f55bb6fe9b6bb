use std::sync::Arc;

use crate::circle::application::domain::entities::Circle;
use crate::circle::application::ports::outgoing::{CircleQuery, CircleQueryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveCircleError {
    #[error("Circle not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves `{slug_name}` path segments to active circles.
#[derive(Clone)]
pub struct CircleResolver {
    circle_query: Arc<dyn CircleQuery + Send + Sync>,
}

impl CircleResolver {
    pub fn new(circle_query: Arc<dyn CircleQuery + Send + Sync>) -> Self {
        Self { circle_query }
    }

    pub async fn active_by_slug(&self, slug_name: &str) -> Result<Circle, ResolveCircleError> {
        match self.circle_query.find_by_slug(slug_name).await {
            Ok(Some(circle)) if circle.is_active => Ok(circle),
            Ok(_) => Err(ResolveCircleError::NotFound),
            Err(CircleQueryError::DatabaseError(msg)) => {
                Err(ResolveCircleError::RepositoryError(msg))
            }
        }
    }
}
