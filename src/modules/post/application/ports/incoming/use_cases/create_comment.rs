use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::post::application::ports::outgoing::{CommentView, NewComment};
use crate::shared::validation::{required_text, FieldErrors};

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    data: NewComment,
}

impl CreateCommentCommand {
    pub fn new(requester: UserId, post_id: Uuid, content: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let content = required_text(&mut errors, "content", content, usize::MAX);
        errors.into_result()?;

        let content = content.ok_or_else(|| FieldErrors::non_field("Invalid comment data."))?;

        Ok(Self {
            data: NewComment {
                post_id,
                user_id: requester,
                content,
            },
        })
    }

    pub fn post_id(&self) -> Uuid {
        self.data.post_id
    }

    pub fn data(&self) -> &NewComment {
        &self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(&self, command: CreateCommentCommand)
        -> Result<CommentView, CreateCommentError>;
}
