use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::account::application::ports::outgoing::AccountSummary;
use crate::breed::application::ports::outgoing::BreedView;
use crate::circle::application::domain::entities::CircleId;
use crate::circle::application::ports::outgoing::CircleSummary;
use crate::post::application::domain::entities::{
    Color, Comment, PetSize, Post, PostState, PostTag,
};
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

/// Compact post used in listings and profiles.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostCard {
    pub id: Uuid,
    pub name: Option<String>,
    pub information: String,
    pub tag: PostTag,
    pub state: PostState,
    pub photo_first: String,
    pub created_at: DateTime<Utc>,
    /// Author username
    pub user: String,
    /// Circle slug_name
    pub circle: Option<String>,
}

impl PostCard {
    pub fn from_post(post: &Post, username: String, circle_slug: Option<String>) -> Self {
        Self {
            id: post.id,
            name: post.name.clone(),
            information: post.information.clone(),
            tag: post.tag,
            state: post.state,
            photo_first: post.photo_first.clone(),
            created_at: post.created_at,
            user: username,
            circle: circle_slug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostDetail {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: AccountSummary,
    pub circle: Option<CircleSummary>,
    pub breed: BreedView,
}

impl PostDetail {
    pub fn new(
        post: &Post,
        user: AccountSummary,
        circle: Option<CircleSummary>,
        breed: BreedView,
    ) -> Self {
        Self {
            id: post.id,
            name: post.name.clone(),
            information: post.information.clone(),
            tag: post.tag,
            state: post.state,
            color_primary: post.color_primary,
            color_secondary: post.color_secondary,
            size: post.size,
            photo_first: post.photo_first.clone(),
            photo_second: post.photo_second.clone(),
            photo_third: post.photo_third.clone(),
            latitude: post.latitude,
            longitude: post.longitude,
            created_at: post.created_at,
            updated_at: post.updated_at,
            user,
            circle,
            breed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentView {
    pub id: Uuid,
    pub post_id: Uuid,
    /// Author username
    pub user: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    pub fn from_comment(comment: &Comment, username: String) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user: username,
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Listing
// ──────────────────────────────────────────────────────────
//

/// All criteria are conjunctive; results are newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostListFilter {
    pub tag: Option<PostTag>,
    pub state: Option<PostState>,
    pub user_id: Option<UserId>,
    pub circle_id: Option<CircleId>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, PostQueryError>;

    async fn detail(&self, post: &Post) -> Result<PostDetail, PostQueryError>;

    async fn list_cards(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, PostQueryError>;

    /// The comment only when it belongs to `post_id`.
    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, PostQueryError>;

    async fn comment_view(&self, comment: &Comment) -> Result<CommentView, PostQueryError>;

    /// Newest first.
    async fn list_comments(
        &self,
        post_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentView>, PostQueryError>;
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::breed::application::domain::entities::{test_fixtures::breed, Animal};

    /// Detail of `post` authored by "ana", without circle.
    pub fn post_detail(post: &Post) -> PostDetail {
        PostDetail::new(
            post,
            AccountSummary::from_account(&account("ana"), 0, 0),
            None,
            BreedView::from(&breed(Animal::Dog, "Beagle")),
        )
    }
}
