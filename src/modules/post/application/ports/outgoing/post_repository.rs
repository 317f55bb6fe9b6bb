use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::CircleId;
use crate::post::application::domain::entities::{
    Color, Comment, PetSize, Post, PostState, PostTag,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub user_id: UserId,
    pub breed_id: Uuid,
    pub circle_id: Option<CircleId>,
    pub name: Option<String>,
    pub information: String,
    pub tag: PostTag,
    pub state: PostState,
    pub color_primary: Color,
    pub color_secondary: Option<Color>,
    pub size: PetSize,
    pub photo_first: String,
    pub photo_second: Option<String>,
    pub photo_third: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Partial update. `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostChanges {
    pub breed_id: Option<Uuid>,
    pub circle_id: Option<Option<CircleId>>,
    pub name: Option<Option<String>>,
    pub information: Option<String>,
    pub tag: Option<PostTag>,
    pub state: Option<PostState>,
    pub color_primary: Option<Color>,
    pub color_secondary: Option<Option<Color>>,
    pub size: Option<PetSize>,
    pub photo_first: Option<String>,
    pub photo_second: Option<Option<String>>,
    pub photo_third: Option<Option<String>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub post_id: Uuid,
    pub user_id: UserId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, data: NewPost) -> Result<Post, PostRepositoryError>;

    async fn update_post(&self, id: Uuid, changes: PostChanges)
        -> Result<Post, PostRepositoryError>;

    /// Hard delete; comments go with it.
    async fn delete_post(&self, id: Uuid) -> Result<(), PostRepositoryError>;

    async fn create_comment(&self, data: NewComment) -> Result<Comment, PostRepositoryError>;

    async fn delete_comment(&self, id: Uuid) -> Result<(), PostRepositoryError>;
}
