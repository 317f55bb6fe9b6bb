use async_trait::async_trait;

use crate::post::application::ports::{
    incoming::use_cases::{ListPostsError, ListPostsUseCase},
    outgoing::{PostCard, PostListFilter, PostQuery},
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPostsUseCase for ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListPostsError> {
        self.query
            .list_cards(filter, page)
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::post::application::domain::entities::{PostState, PostTag};
    use crate::post::application::domain::policies::test_fixtures::post;
    use crate::post::application::services::mocks::MockPostQuery;

    #[tokio::test]
    async fn filters_by_tag_and_state() {
        let ana = account("ana");
        let lost = post(ana.id);
        let mut found = post(ana.id);
        found.tag = PostTag::Found;
        let mut closed = post(ana.id);
        closed.state = PostState::Finished;

        let service = ListPostsService::new(
            MockPostQuery::with(vec![lost.clone(), found, closed]).with_accounts(vec![ana]),
        );

        let page = service
            .execute(
                PostListFilter {
                    tag: Some(PostTag::Lost),
                    state: Some(PostState::Open),
                    ..Default::default()
                },
                PageRequest::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, lost.id);
        assert_eq!(page.items[0].user, "ana");
    }
}
