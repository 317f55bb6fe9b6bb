use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::application::domain::entities::{Account, UserId};
use crate::circle::application::ports::outgoing::CircleSummary;
use crate::post::application::ports::outgoing::PostCard;
use crate::shared::pagination::{Ordering, PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

/// Public view of an account, embedded wherever a user is shown.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AccountSummary {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub profile_photo: Option<String>,
    pub biography: Option<String>,
    pub is_verified: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub number_of_follows: u64,
    pub number_of_followers: u64,
}

impl AccountSummary {
    pub fn from_account(account: &Account, number_of_follows: u64, number_of_followers: u64) -> Self {
        Self {
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            profile_photo: account.profile_photo.clone(),
            biography: account.biography.clone(),
            is_verified: account.is_verified,
            latitude: account.latitude,
            longitude: account.longitude,
            phone: account.phone.clone(),
            number_of_follows,
            number_of_followers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MembershipView {
    pub circle: CircleSummary,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AccountProfile {
    #[serde(flatten)]
    pub account: AccountSummary,
    pub follows: Vec<AccountSummary>,
    pub followers: Vec<AccountSummary>,
    pub subscriptions: Vec<MembershipView>,
    pub posts: Vec<PostCard>,
}

//
// ──────────────────────────────────────────────────────────
// Listing
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOrderField {
    Username,
    Created,
}

impl FromStr for AccountOrderField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "created" => Ok(Self::Created),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountListFilter {
    pub search: Option<String>,
    pub is_verified: Option<bool>,
    pub ordering: Ordering<AccountOrderField>,
}

impl Default for AccountListFilter {
    fn default() -> Self {
        Self {
            search: None,
            is_verified: None,
            ordering: Ordering::asc(AccountOrderField::Username),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Looks the account up regardless of `is_active`.
    async fn find_by_id(&self, id: UserId) -> Result<Option<Account>, AccountQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError>;

    /// Looks the account up regardless of `is_active`.
    async fn find_by_username(&self, username: &str)
        -> Result<Option<Account>, AccountQueryError>;

    async fn summary(&self, account: &Account) -> Result<AccountSummary, AccountQueryError>;

    /// Active accounts only.
    async fn list_summaries(
        &self,
        filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, AccountQueryError>;

    async fn profile(&self, account: &Account) -> Result<AccountProfile, AccountQueryError>;
}
