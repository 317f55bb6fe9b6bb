use std::sync::Arc;

use crate::account::application::domain::entities::Account;
use crate::account::application::ports::outgoing::{AccountQuery, AccountQueryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveAccountError {
    #[error("Account not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves `{username}` path segments to active accounts for other modules.
#[derive(Clone)]
pub struct AccountResolver {
    account_query: Arc<dyn AccountQuery + Send + Sync>,
}

impl AccountResolver {
    pub fn new(account_query: Arc<dyn AccountQuery + Send + Sync>) -> Self {
        Self { account_query }
    }

    pub async fn active_by_username(&self, username: &str) -> Result<Account, ResolveAccountError> {
        match self.account_query.find_by_username(username).await {
            Ok(Some(account)) if account.is_active => Ok(account),
            Ok(_) => Err(ResolveAccountError::NotFound),
            Err(AccountQueryError::DatabaseError(msg)) => {
                Err(ResolveAccountError::RepositoryError(msg))
            }
        }
    }
}
