use async_trait::async_trait;

use crate::circle::application::ports::outgoing::MemberView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubscriptionsError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSubscriptionsUseCase: Send + Sync {
    async fn execute(
        &self,
        slug_name: &str,
        is_admin: Option<bool>,
        page: PageRequest,
    ) -> Result<PageResult<MemberView>, ListSubscriptionsError>;
}
