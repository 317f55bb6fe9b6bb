use std::sync::Arc;

use async_trait::async_trait;

use crate::account::application::ports::{
    incoming::use_cases::{ConfirmAccountCommand, ConfirmAccountError, ConfirmAccountUseCase},
    outgoing::{
        token_provider::CONFIRMATION_TOKEN_TYPE, AccountQuery, AccountRepository, TokenError,
        TokenProvider,
    },
};

#[derive(Clone)]
pub struct ConfirmAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    repository: R,
    query: Q,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R, Q> ConfirmAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            repository,
            query,
            tokens,
        }
    }
}

#[async_trait]
impl<R, Q> ConfirmAccountUseCase for ConfirmAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, command: ConfirmAccountCommand) -> Result<(), ConfirmAccountError> {
        let claims = self
            .tokens
            .verify_confirmation_token(command.token())
            .map_err(|e| match e {
                TokenError::TokenExpired => ConfirmAccountError::LinkExpired,
                _ => ConfirmAccountError::InvalidToken,
            })?;

        let account = self
            .query
            .find_by_username(&claims.username)
            .await
            .map_err(|e| ConfirmAccountError::RepositoryError(e.to_string()))?
            .ok_or(ConfirmAccountError::InvalidToken)?;

        if account.is_confirmed {
            return Err(ConfirmAccountError::AlreadyConfirmed);
        }

        if claims.token_type != CONFIRMATION_TOKEN_TYPE {
            tracing::warn!(
                username = %account.username,
                token_type = %claims.token_type,
                "Confirmation attempted with wrong token type"
            );
            return Err(ConfirmAccountError::InvalidToken);
        }

        self.repository
            .mark_confirmed(account.id)
            .await
            .map_err(|e| ConfirmAccountError::RepositoryError(e.to_string()))?;

        tracing::info!(username = %account.username, "Account confirmed");
        Ok(())
    }
}
