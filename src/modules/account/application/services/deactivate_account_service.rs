use async_trait::async_trait;

use crate::account::application::domain::policies::is_owner_account;
use crate::account::application::ports::{
    incoming::use_cases::{
        DeactivateAccountCommand, DeactivateAccountError, DeactivateAccountUseCase,
    },
    outgoing::{AccountQuery, AccountRepository},
};

#[derive(Debug, Clone)]
pub struct DeactivateAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeactivateAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeactivateAccountUseCase for DeactivateAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: DeactivateAccountCommand,
    ) -> Result<(), DeactivateAccountError> {
        let account = self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| DeactivateAccountError::RepositoryError(e.to_string()))?
            .filter(|account| account.is_active)
            .ok_or(DeactivateAccountError::AccountNotFound)?;

        is_owner_account(command.requester, &account).map_err(DeactivateAccountError::Forbidden)?;

        self.repository
            .deactivate_account(account.id)
            .await
            .map_err(|e| DeactivateAccountError::RepositoryError(e.to_string()))?;

        tracing::info!(username = %account.username, "Account deactivated");
        Ok(())
    }
}
