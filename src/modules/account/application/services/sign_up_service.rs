use std::sync::Arc;

use async_trait::async_trait;

use crate::account::application::ports::{
    incoming::use_cases::{SignUpCommand, SignUpError, SignUpUseCase},
    outgoing::{AccountRepository, AccountRepositoryError, AccountSummary, NewAccount, PasswordHasher},
};
use crate::shared::validation::FieldErrors;

#[derive(Clone)]
pub struct SignUpService<R>
where
    R: AccountRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> SignUpService<R>
where
    R: AccountRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> SignUpUseCase for SignUpService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, command: SignUpCommand) -> Result<AccountSummary, SignUpError> {
        let password_hash = self
            .hasher
            .hash(command.password())
            .await
            .map_err(|e| SignUpError::PasswordHashError(e.to_string()))?;

        let data = NewAccount {
            username: command.username().to_string(),
            email: command.email().to_string(),
            password_hash,
            first_name: command.first_name().to_string(),
            last_name: command.last_name().to_string(),
            phone: command.phone().map(str::to_string),
        };

        let account = self
            .repository
            .create_account(data)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::EmailAlreadyExists => {
                    SignUpError::Validation(FieldErrors::single("email", e.to_string()))
                }
                AccountRepositoryError::UsernameAlreadyExists => {
                    SignUpError::Validation(FieldErrors::single("username", e.to_string()))
                }
                other => SignUpError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(username = %account.username, "Account created");

        Ok(AccountSummary::from_account(&account, 0, 0))
    }
}
