use async_trait::async_trait;

use crate::account::application::helpers::{AccountResolver, ResolveAccountError};
use crate::post::application::ports::{
    incoming::use_cases::{ListAccountPostsError, ListAccountPostsUseCase},
    outgoing::{PostCard, PostListFilter, PostQuery},
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListAccountPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
    accounts: AccountResolver,
}

impl<Q> ListAccountPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q, accounts: AccountResolver) -> Self {
        Self { query, accounts }
    }
}

#[async_trait]
impl<Q> ListAccountPostsUseCase for ListAccountPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListAccountPostsError> {
        let account = self
            .accounts
            .active_by_username(username)
            .await
            .map_err(|e| match e {
                ResolveAccountError::NotFound => ListAccountPostsError::AccountNotFound,
                ResolveAccountError::RepositoryError(msg) => {
                    ListAccountPostsError::RepositoryError(msg)
                }
            })?;

        let filter = PostListFilter {
            user_id: Some(account.id),
            ..Default::default()
        };

        self.query
            .list_cards(filter, page)
            .await
            .map_err(|e| ListAccountPostsError::RepositoryError(e.to_string()))
    }
}
