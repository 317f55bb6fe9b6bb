use async_trait::async_trait;

use crate::circle::application::ports::{
    incoming::use_cases::{ListCirclesError, ListCirclesUseCase},
    outgoing::{CircleListFilter, CircleQuery, CircleSummary},
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct ListCirclesService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCirclesService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCirclesUseCase for ListCirclesService<Q>
where
    Q: CircleQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: CircleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CircleSummary>, ListCirclesError> {
        self.query
            .list_summaries(filter, page)
            .await
            .map_err(|e| ListCirclesError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::application::domain::policies::test_fixtures::circle;
    use crate::circle::application::services::mocks::MockCircleQuery;

    #[tokio::test]
    async fn inactive_circles_are_hidden() {
        let mut closed = circle("closed");
        closed.is_active = false;
        let service = ListCirclesService::new(MockCircleQuery::with(
            vec![circle("quito"), closed],
            vec![],
        ));

        let page = service
            .execute(CircleListFilter::default(), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].slug_name, "quito");
    }

    #[tokio::test]
    async fn failure_is_repository_error() {
        let result = ListCirclesService::new(MockCircleQuery::failing())
            .execute(CircleListFilter::default(), PageRequest::default())
            .await;

        assert!(matches!(result, Err(ListCirclesError::RepositoryError(_))));
    }
}
