use async_trait::async_trait;

use crate::shared::validation::{max_length_message, FieldErrors, REQUIRED};

const MAX_TOKEN_LENGTH: usize = 1024;

#[derive(Debug, Clone)]
pub struct ConfirmAccountCommand {
    token: String,
}

impl ConfirmAccountCommand {
    pub fn new(token: &str) -> Result<Self, FieldErrors> {
        let token = token.trim();

        if token.is_empty() {
            return Err(FieldErrors::single("token", REQUIRED));
        }
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(FieldErrors::single(
                "token",
                max_length_message(MAX_TOKEN_LENGTH),
            ));
        }

        Ok(Self {
            token: token.to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfirmAccountError {
    #[error("Link expired.")]
    LinkExpired,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("This email account is already confirmed.")]
    AlreadyConfirmed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ConfirmAccountUseCase: Send + Sync {
    async fn execute(&self, command: ConfirmAccountCommand) -> Result<(), ConfirmAccountError>;
}
