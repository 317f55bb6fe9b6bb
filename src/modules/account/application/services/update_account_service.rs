use async_trait::async_trait;

use crate::account::application::domain::policies::{is_confirmed_account, is_owner_account};
use crate::account::application::ports::{
    incoming::use_cases::{UpdateAccountCommand, UpdateAccountError, UpdateAccountUseCase},
    outgoing::{AccountQuery, AccountRepository, AccountRepositoryError, AccountSummary},
};
use crate::shared::{permissions::check_all, validation::FieldErrors};

#[derive(Debug, Clone)]
pub struct UpdateAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateAccountUseCase for UpdateAccountService<R, Q>
where
    R: AccountRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateAccountCommand,
    ) -> Result<AccountSummary, UpdateAccountError> {
        let account = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| UpdateAccountError::RepositoryError(e.to_string()))?
            .filter(|account| account.is_active)
            .ok_or(UpdateAccountError::AccountNotFound)?;

        check_all([
            is_owner_account(command.requester(), &account),
            is_confirmed_account(&account),
        ])
        .map_err(UpdateAccountError::Forbidden)?;

        let account = if command.changes().is_empty() {
            account
        } else {
            self.repository
                .update_account(account.id, command.changes().clone())
                .await
                .map_err(|e| match e {
                    AccountRepositoryError::UsernameAlreadyExists => {
                        UpdateAccountError::Validation(FieldErrors::single(
                            "username",
                            e.to_string(),
                        ))
                    }
                    AccountRepositoryError::AccountNotFound => UpdateAccountError::AccountNotFound,
                    other => UpdateAccountError::RepositoryError(other.to_string()),
                })?
        };

        self.query
            .summary(&account)
            .await
            .map_err(|e| UpdateAccountError::RepositoryError(e.to_string()))
    }
}
