use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::{Circle, CircleId, Subscription};

#[derive(Debug, Clone, PartialEq)]
pub struct NewCircle {
    pub name: String,
    pub slug_name: String,
    pub about: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
}

/// Partial update. `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleChanges {
    pub name: Option<String>,
    pub slug_name: Option<String>,
    pub about: Option<Option<String>>,
    pub profile_photo: Option<Option<String>>,
    pub cover_photo: Option<Option<String>>,
}

impl CircleChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CircleRepositoryError {
    #[error("A circle with this slugname already exists.")]
    SlugAlreadyExists,

    #[error("This subscription already exists.")]
    SubscriptionAlreadyExists,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CircleRepository: Send + Sync {
    /// Inserts the circle and the creator's admin subscription atomically.
    async fn create_circle(
        &self,
        creator: UserId,
        data: NewCircle,
    ) -> Result<Circle, CircleRepositoryError>;

    async fn update_circle(
        &self,
        id: CircleId,
        changes: CircleChanges,
    ) -> Result<Circle, CircleRepositoryError>;

    async fn deactivate_circle(&self, id: CircleId) -> Result<(), CircleRepositoryError>;

    async fn create_subscription(
        &self,
        user_id: UserId,
        circle_id: CircleId,
        is_admin: bool,
    ) -> Result<Subscription, CircleRepositoryError>;

    async fn delete_subscription(&self, id: Uuid) -> Result<(), CircleRepositoryError>;
}
