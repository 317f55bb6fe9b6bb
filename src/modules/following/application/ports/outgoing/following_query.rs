use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::application::domain::entities::UserId;
use crate::account::application::ports::outgoing::AccountSummary;
use crate::following::application::domain::entities::Following;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FollowingDetail {
    pub follower: AccountSummary,
    pub followed: AccountSummary,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowingQuery: Send + Sync {
    async fn find(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Option<Following>, FollowingQueryError>;

    async fn detail(&self, following: &Following) -> Result<FollowingDetail, FollowingQueryError>;

    /// Active accounts `user_id` follows, by username.
    async fn list_follows(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, FollowingQueryError>;

    /// Active accounts following `user_id`, by username.
    async fn list_followers(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, FollowingQueryError>;
}
