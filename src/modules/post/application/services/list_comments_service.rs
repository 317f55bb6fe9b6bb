use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::ports::{
    incoming::use_cases::{ListCommentsError, ListCommentsUseCase},
    outgoing::{CommentView, PostQuery},
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListCommentsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCommentsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCommentsUseCase for ListCommentsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentView>, ListCommentsError> {
        self.query
            .find_by_id(post_id)
            .await
            .map_err(|e| ListCommentsError::RepositoryError(e.to_string()))?
            .ok_or(ListCommentsError::PostNotFound)?;

        self.query
            .list_comments(post_id, page)
            .await
            .map_err(|e| ListCommentsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::post::application::domain::policies::test_fixtures::{comment, post};
    use crate::post::application::services::mocks::MockPostQuery;

    #[tokio::test]
    async fn lists_comments_of_post() {
        let ana = account("ana");
        let p = post(ana.id);
        let other = post(ana.id);
        let service = ListCommentsService::new(
            MockPostQuery::with(vec![p.clone(), other.clone()])
                .with_comments(vec![comment(&p, ana.id), comment(&other, ana.id)])
                .with_accounts(vec![ana]),
        );

        let page = service.execute(p.id, PageRequest::default()).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].user, "ana");
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let service = ListCommentsService::new(MockPostQuery::default());

        assert!(matches!(
            service.execute(Uuid::new_v4(), PageRequest::default()).await,
            Err(ListCommentsError::PostNotFound)
        ));
    }
}
