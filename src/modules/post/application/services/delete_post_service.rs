use async_trait::async_trait;

use crate::post::application::domain::policies::is_post_owner;
use crate::post::application::ports::{
    incoming::use_cases::{DeletePostCommand, DeletePostError, DeletePostUseCase},
    outgoing::{PostQuery, PostRepository, PostRepositoryError},
};

pub struct DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeletePostUseCase for DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, command: DeletePostCommand) -> Result<(), DeletePostError> {
        let post = self
            .query
            .find_by_id(command.post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::PostNotFound)?;

        is_post_owner(command.requester, &post).map_err(DeletePostError::Forbidden)?;

        self.repository
            .delete_post(post.id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeletePostError::PostNotFound,
                other => DeletePostError::RepositoryError(other.to_string()),
            })
    }
}
