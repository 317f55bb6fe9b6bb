use std::sync::Arc;

use async_trait::async_trait;

use crate::account::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginResult, LoginUseCase},
    outgoing::{AccountQuery, PasswordHasher, TokenProvider},
};

#[derive(Clone)]
pub struct LoginService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUseCase for LoginService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        let account = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .filter(|account| account.is_active)
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify(command.password(), &account.password_hash)
            .await
            .map_err(|e| LoginError::PasswordHashError(e.to_string()))?;

        if !matches {
            tracing::debug!(username = %account.username, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        if !account.is_confirmed {
            return Err(LoginError::AccountNotConfirmed);
        }

        let token = self
            .tokens
            .generate_access_token(account.id, account.is_confirmed)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let user = self
            .query
            .summary(&account)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        Ok(LoginResult { user, token })
    }
}
