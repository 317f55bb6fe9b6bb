use async_trait::async_trait;

use crate::circle::application::ports::{
    incoming::use_cases::{ListSubscriptionsError, ListSubscriptionsUseCase},
    outgoing::{CircleQuery, MemberView},
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListSubscriptionsService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListSubscriptionsService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSubscriptionsUseCase for ListSubscriptionsService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    async fn execute(
        &self,
        slug_name: &str,
        is_admin: Option<bool>,
        page: PageRequest,
    ) -> Result<PageResult<MemberView>, ListSubscriptionsError> {
        let circle = self
            .query
            .find_by_slug(slug_name)
            .await
            .map_err(|e| ListSubscriptionsError::RepositoryError(e.to_string()))?
            .filter(|circle| circle.is_active)
            .ok_or(ListSubscriptionsError::CircleNotFound)?;

        self.query
            .list_members(circle.id, is_admin, page)
            .await
            .map_err(|e| ListSubscriptionsError::RepositoryError(e.to_string()))
    }
}
