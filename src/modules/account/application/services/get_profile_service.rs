use async_trait::async_trait;

use crate::account::application::ports::{
    incoming::use_cases::{GetProfileError, GetProfileUseCase},
    outgoing::{AccountProfile, AccountQuery},
};

#[derive(Debug, Clone)]
pub struct GetProfileService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<AccountProfile, GetProfileError> {
        let account = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?
            .filter(|account| account.is_active)
            .ok_or(GetProfileError::AccountNotFound)?;

        self.query
            .profile(&account)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))
    }
}
