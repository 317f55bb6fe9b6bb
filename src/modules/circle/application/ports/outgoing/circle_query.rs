use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::application::domain::entities::UserId;
use crate::account::application::ports::outgoing::AccountSummary;
use crate::circle::application::domain::entities::{Circle, CircleId, Subscription};
use crate::shared::pagination::{Ordering, PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CircleSummary {
    pub name: String,
    pub slug_name: String,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub about: Option<String>,
    pub is_verified: bool,
    pub number_of_subscriptions: u64,
}

impl CircleSummary {
    pub fn from_circle(circle: &Circle, number_of_subscriptions: u64) -> Self {
        Self {
            name: circle.name.clone(),
            slug_name: circle.slug_name.clone(),
            profile_photo: circle.profile_photo.clone(),
            cover_photo: circle.cover_photo.clone(),
            about: circle.about.clone(),
            is_verified: circle.is_verified,
            number_of_subscriptions,
        }
    }
}

/// Circle with its first members.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CircleDetail {
    #[serde(flatten)]
    pub circle: CircleSummary,
    pub members: Vec<AccountSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MemberView {
    pub user: AccountSummary,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SubscriptionDetail {
    pub user: AccountSummary,
    pub circle: CircleSummary,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Listing
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleOrderField {
    Created,
}

impl FromStr for CircleOrderField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleListFilter {
    /// Matches slug_name or name
    pub search: Option<String>,
    pub is_verified: Option<bool>,
    pub ordering: Ordering<CircleOrderField>,
}

impl Default for CircleListFilter {
    fn default() -> Self {
        Self {
            search: None,
            is_verified: None,
            ordering: Ordering::desc(CircleOrderField::Created),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CircleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CircleQuery: Send + Sync {
    /// Looks the circle up regardless of `is_active`.
    async fn find_by_slug(&self, slug_name: &str) -> Result<Option<Circle>, CircleQueryError>;

    async fn summary(&self, circle: &Circle) -> Result<CircleSummary, CircleQueryError>;

    async fn detail(&self, circle: &Circle) -> Result<CircleDetail, CircleQueryError>;

    /// Active circles only.
    async fn list_summaries(
        &self,
        filter: CircleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CircleSummary>, CircleQueryError>;

    async fn find_subscription(
        &self,
        user_id: UserId,
        circle_id: CircleId,
    ) -> Result<Option<Subscription>, CircleQueryError>;

    async fn subscription_detail(
        &self,
        subscription: &Subscription,
    ) -> Result<SubscriptionDetail, CircleQueryError>;

    /// Members of the circle, oldest subscription first.
    async fn list_members(
        &self,
        circle_id: CircleId,
        is_admin: Option<bool>,
        page: PageRequest,
    ) -> Result<PageResult<MemberView>, CircleQueryError>;
}
