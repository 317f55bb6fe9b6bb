use async_trait::async_trait;

use crate::post::application::domain::policies::is_post_owner;
use crate::post::application::ports::{
    incoming::use_cases::{UpdatePostCommand, UpdatePostError, UpdatePostUseCase},
    outgoing::{PostDetail, PostQuery, PostRepository, PostRepositoryError},
};

use super::post_references::{PostReferences, ReferenceError};

impl From<ReferenceError> for UpdatePostError {
    fn from(e: ReferenceError) -> Self {
        match e {
            ReferenceError::Invalid(errors) => UpdatePostError::Validation(errors),
            ReferenceError::Forbidden(denial) => UpdatePostError::Forbidden(denial),
            ReferenceError::Repository(msg) => UpdatePostError::RepositoryError(msg),
        }
    }
}

pub struct UpdatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
    references: PostReferences,
}

impl<R, Q> UpdatePostService<R, Q>
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
impl<R, Q> UpdatePostUseCase for UpdatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, command: UpdatePostCommand) -> Result<PostDetail, UpdatePostError> {
        let post = self
            .query
            .find_by_id(command.post_id())
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::PostNotFound)?;

        is_post_owner(command.requester(), &post).map_err(UpdatePostError::Forbidden)?;

        let mut changes = command.changes().clone();

        if let Some(breed_id) = changes.breed_id {
            self.references.check_breed(breed_id).await?;
        }

        match command.circle_slug() {
            Some(Some(slug)) => {
                let circle_id = self
                    .references
                    .member_circle(command.requester(), slug)
                    .await?;
                changes.circle_id = Some(Some(circle_id));
            }
            Some(None) => changes.circle_id = Some(None),
            None => {}
        }

        let post = if changes.is_empty() {
            post
        } else {
            self.repository
                .update_post(post.id, changes)
                .await
                .map_err(|e| match e {
                    PostRepositoryError::NotFound => UpdatePostError::PostNotFound,
                    other => UpdatePostError::RepositoryError(other.to_string()),
                })?
        };

        self.query
            .detail(&post)
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))
    }
}
