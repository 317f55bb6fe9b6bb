use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;

/// `follower_id` follows `followed_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Following {
    pub id: Uuid,
    pub follower_id: UserId,
    pub followed_id: UserId,
    pub created_at: DateTime<Utc>,
}
