use async_trait::async_trait;

use crate::account::application::ports::outgoing::AccountSummary;
use crate::shared::validation::{
    is_valid_phone, is_valid_username, required_text, FieldErrors, NON_FIELD_ERRORS, REQUIRED,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const INVALID_USERNAME: &str =
    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_PHONE: &str = "Phone number can contains a country code, and allow 16 characters maximum. Example: +593 0987654321.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "The passwords does not match.";

//
// ──────────────────────────────────────────────────────────
// Sign Up Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct SignUpCommand {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    password: String,
}

impl std::fmt::Debug for SignUpCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpCommand")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SignUpCommand {
    pub fn new(
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
        password: &str,
        password_confirmation: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = required_text(&mut errors, "username", username, 150);
        if let Some(name) = &username {
            if !is_valid_username(name) {
                errors.add("username", INVALID_USERNAME);
            }
        }

        let email = email.trim();
        if email.is_empty() {
            errors.add("email", REQUIRED);
        } else if !email_address::EmailAddress::is_valid(email) {
            errors.add("email", INVALID_EMAIL);
        }

        let first_name = required_text(&mut errors, "first_name", first_name, 30);
        let last_name = required_text(&mut errors, "last_name", last_name, 150);

        let phone = phone.map(str::trim).filter(|p| !p.is_empty());
        if let Some(p) = phone {
            if p.len() > 16 || !is_valid_phone(p) {
                errors.add("phone", INVALID_PHONE);
            }
        }

        if password.is_empty() {
            errors.add("password", REQUIRED);
        } else if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(
                "password",
                format!(
                    "This password is too short. It must contain at least {} characters.",
                    MIN_PASSWORD_LENGTH
                ),
            );
        }

        if password_confirmation.is_empty() {
            errors.add("password_confirmation", REQUIRED);
        } else if !password.is_empty() && password != password_confirmation {
            errors.add(NON_FIELD_ERRORS, PASSWORDS_DO_NOT_MATCH);
        }

        errors.into_result()?;

        Ok(Self {
            username: username.unwrap_or_default(),
            email: email.to_string(),
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            phone: phone.map(str::to_string),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignUpError {
    #[error("Invalid sign up data: {0}")]
    Validation(FieldErrors),

    #[error("Password hashing failed: {0}")]
    PasswordHashError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SignUpUseCase: Send + Sync {
    async fn execute(&self, command: SignUpCommand) -> Result<AccountSummary, SignUpError>;
}
