use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::following::application::domain::entities::Following;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FollowingRepositoryError {
    #[error("This following already exist.")]
    AlreadyExists,

    #[error("Following not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowingRepository: Send + Sync {
    async fn create_following(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Following, FollowingRepositoryError>;

    async fn delete_following(&self, id: Uuid) -> Result<(), FollowingRepositoryError>;
}
