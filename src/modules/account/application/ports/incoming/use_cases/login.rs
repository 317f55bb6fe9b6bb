use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::application::ports::outgoing::AccountSummary;
use crate::shared::validation::{FieldErrors, REQUIRED};

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

impl LoginCommand {
    pub fn new(email: &str, password: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = email.trim();

        if email.is_empty() {
            errors.add("email", REQUIRED);
        }
        if password.is_empty() {
            errors.add("password", REQUIRED);
        }
        errors.into_result()?;

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResult {
    pub user: AccountSummary,
    pub token: String,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("The email for this account has not yet been confirmed.")]
    AccountNotConfirmed,

    #[error("Password verification failed: {0}")]
    PasswordHashError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}
