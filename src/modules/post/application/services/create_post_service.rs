use async_trait::async_trait;
use tracing::debug;

use crate::post::application::ports::{
    incoming::use_cases::{CreatePostCommand, CreatePostError, CreatePostUseCase},
    outgoing::{PostDetail, PostQuery, PostRepository},
};

use super::post_references::{PostReferences, ReferenceError};

impl From<ReferenceError> for CreatePostError {
    fn from(e: ReferenceError) -> Self {
        match e {
            ReferenceError::Invalid(errors) => CreatePostError::Validation(errors),
            ReferenceError::Forbidden(denial) => CreatePostError::Forbidden(denial),
            ReferenceError::Repository(msg) => CreatePostError::RepositoryError(msg),
        }
    }
}

pub struct CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
    references: PostReferences,
}

impl<R, Q> CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, references: PostReferences) -> Self {
        Self {
            repository,
            query,
            references,
        }
    }
}

#[async_trait]
impl<R, Q> CreatePostUseCase for CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, command: CreatePostCommand) -> Result<PostDetail, CreatePostError> {
        let mut data = command.data().clone();

        self.references.check_breed(data.breed_id).await?;

        if let Some(slug) = command.circle_slug() {
            data.circle_id = Some(
                self.references
                    .member_circle(command.requester(), slug)
                    .await?,
            );
        }

        let post = self
            .repository
            .create_post(data)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        debug!(post_id = %post.id, user_id = %post.user_id, "Post stored");

        self.query
            .detail(&post)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))
    }
}
