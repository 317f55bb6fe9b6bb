//! Hand-written port doubles shared by the account service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, UserId};
use crate::account::application::ports::outgoing::{
    AccessClaims, AccountChanges, AccountListFilter, AccountProfile, AccountQuery,
    AccountQueryError, AccountRepository, AccountRepositoryError, AccountSummary,
    ConfirmationClaims, HashError, NewAccount, PasswordHasher, TokenError, TokenProvider,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockAccountQuery {
    pub accounts: Vec<Account>,
    pub fail: bool,
}

impl MockAccountQuery {
    pub fn with(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            accounts: vec![],
            fail: true,
        }
    }

    fn check(&self) -> Result<(), AccountQueryError> {
        if self.fail {
            Err(AccountQueryError::DatabaseError("db down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AccountQuery for MockAccountQuery {
    async fn find_by_id(&self, id: UserId) -> Result<Option<Account>, AccountQueryError> {
        self.check()?;
        Ok(self.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        self.check()?;
        Ok(self.accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        self.check()?;
        Ok(self.accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn summary(&self, account: &Account) -> Result<AccountSummary, AccountQueryError> {
        self.check()?;
        Ok(AccountSummary::from_account(account, 0, 0))
    }

    async fn list_summaries(
        &self,
        _filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, AccountQueryError> {
        self.check()?;
        let items: Vec<AccountSummary> = self
            .accounts
            .iter()
            .filter(|a| a.is_active)
            .map(|a| AccountSummary::from_account(a, 0, 0))
            .collect();
        let total = items.len() as u64;
        Ok(PageResult::new(items, page, total))
    }

    async fn profile(&self, account: &Account) -> Result<AccountProfile, AccountQueryError> {
        self.check()?;
        Ok(AccountProfile {
            account: AccountSummary::from_account(account, 0, 0),
            follows: vec![],
            followers: vec![],
            subscriptions: vec![],
            posts: vec![],
        })
    }
}

// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockAccountRepository {
    pub accounts: Vec<Account>,
    pub fail_with: Option<AccountRepositoryError>,
    pub created: Mutex<Vec<NewAccount>>,
    pub confirmed: Mutex<Vec<UserId>>,
    pub deactivated: Mutex<Vec<UserId>>,
}

impl MockAccountRepository {
    pub fn with(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            ..Default::default()
        }
    }

    pub fn failing(err: AccountRepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), AccountRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn create_account(&self, data: NewAccount) -> Result<Account, AccountRepositoryError> {
        self.check()?;
        self.created.lock().unwrap().push(data.clone());

        Ok(Account {
            id: UserId::from(Uuid::new_v4()),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            phone: data.phone,
            biography: None,
            profile_photo: None,
            latitude: 0.0,
            longitude: 0.0,
            is_active: true,
            is_confirmed: false,
            is_verified: false,
            created_at: Utc::now(),
        })
    }

    async fn update_account(
        &self,
        id: UserId,
        changes: AccountChanges,
    ) -> Result<Account, AccountRepositoryError> {
        self.check()?;
        let mut account = self
            .accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        if let Some(v) = changes.first_name {
            account.first_name = v;
        }
        if let Some(v) = changes.last_name {
            account.last_name = v;
        }
        if let Some(v) = changes.username {
            account.username = v;
        }
        if let Some(v) = changes.phone {
            account.phone = v;
        }
        if let Some(v) = changes.biography {
            account.biography = v;
        }
        if let Some(v) = changes.profile_photo {
            account.profile_photo = v;
        }
        if let Some(v) = changes.latitude {
            account.latitude = v;
        }
        if let Some(v) = changes.longitude {
            account.longitude = v;
        }

        Ok(account)
    }

    async fn mark_confirmed(&self, id: UserId) -> Result<(), AccountRepositoryError> {
        self.check()?;
        self.confirmed.lock().unwrap().push(id);
        Ok(())
    }

    async fn deactivate_account(&self, id: UserId) -> Result<(), AccountRepositoryError> {
        self.check()?;
        self.deactivated.lock().unwrap().push(id);
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Hasher / tokens
// ──────────────────────────────────────────────────────────

/// "Hashes" by prefixing, so verification is deterministic.
pub struct MockHasher;

#[async_trait]
impl PasswordHasher for MockHasher {
    async fn hash(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

pub struct MockTokenProvider {
    pub confirmation: Result<ConfirmationClaims, TokenError>,
}

impl MockTokenProvider {
    pub fn confirming(username: &str, token_type: &str) -> Self {
        Self {
            confirmation: Ok(ConfirmationClaims {
                username: username.to_string(),
                token_type: token_type.to_string(),
                exp: 9_999_999_999,
            }),
        }
    }

    pub fn failing(err: TokenError) -> Self {
        Self {
            confirmation: Err(err),
        }
    }
}

impl TokenProvider for MockTokenProvider {
    fn generate_access_token(
        &self,
        user_id: UserId,
        _is_confirmed: bool,
    ) -> Result<String, TokenError> {
        Ok(format!("access-{}", user_id))
    }

    fn verify_access_token(&self, _token: &str) -> Result<AccessClaims, TokenError> {
        unimplemented!("Not used in service tests")
    }

    fn generate_confirmation_token(&self, username: &str) -> Result<String, TokenError> {
        Ok(format!("confirm-{}", username))
    }

    fn verify_confirmation_token(&self, _token: &str) -> Result<ConfirmationClaims, TokenError> {
        self.confirmation.clone()
    }
}
