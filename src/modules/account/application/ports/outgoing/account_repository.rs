use async_trait::async_trait;

use crate::account::application::domain::entities::{Account, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

/// Partial update. `None` leaves a column untouched; `Some(None)` clears a
/// nullable one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<Option<String>>,
    pub biography: Option<Option<String>>,
    pub profile_photo: Option<Option<String>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Account not found")]
    AccountNotFound,

    #[error("A user with this email already exists.")]
    EmailAlreadyExists,

    #[error("A user with that username already exists.")]
    UsernameAlreadyExists,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(&self, data: NewAccount) -> Result<Account, AccountRepositoryError>;

    async fn update_account(
        &self,
        id: UserId,
        changes: AccountChanges,
    ) -> Result<Account, AccountRepositoryError>;

    async fn mark_confirmed(&self, id: UserId) -> Result<(), AccountRepositoryError>;

    async fn deactivate_account(&self, id: UserId) -> Result<(), AccountRepositoryError>;
}
