use async_trait::async_trait;

use crate::circle::application::helpers::{CircleResolver, ResolveCircleError};
use crate::circle::application::ports::incoming::use_cases::{
    ListCirclePostsError, ListCirclePostsUseCase,
};
use crate::post::application::ports::outgoing::{PostCard, PostListFilter, PostQuery};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListCirclePostsService<P>
where
    P: PostQuery + Send + Sync,
{
    posts: P,
    circles: CircleResolver,
}

impl<P> ListCirclePostsService<P>
where
    P: PostQuery + Send + Sync,
{
    pub fn new(posts: P, circles: CircleResolver) -> Self {
        Self { posts, circles }
    }
}

#[async_trait]
impl<P> ListCirclePostsUseCase for ListCirclePostsService<P>
where
    P: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        slug_name: &str,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListCirclePostsError> {
        let circle = self
            .circles
            .active_by_slug(slug_name)
            .await
            .map_err(|e| match e {
                ResolveCircleError::NotFound => ListCirclePostsError::CircleNotFound,
                ResolveCircleError::RepositoryError(msg) => {
                    ListCirclePostsError::RepositoryError(msg)
                }
            })?;

        let filter = PostListFilter {
            circle_id: Some(circle.id),
            ..Default::default()
        };

        self.posts
            .list_cards(filter, page)
            .await
            .map_err(|e| ListCirclePostsError::RepositoryError(e.to_string()))
    }
}
