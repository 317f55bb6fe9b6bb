use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircleId(Uuid);

impl From<Uuid> for CircleId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<CircleId> for Uuid {
    fn from(id: CircleId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CircleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A group profile. `slug_name` is the public identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: CircleId,
    pub name: String,
    pub slug_name: String,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub about: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Membership of a user in a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: UserId,
    pub circle_id: CircleId,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}
