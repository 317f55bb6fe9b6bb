//! In-memory post ports for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, UserId};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::breed::application::domain::entities::Breed;
use crate::breed::application::ports::outgoing::BreedView;
use crate::circle::application::domain::entities::Circle;
use crate::circle::application::ports::outgoing::CircleSummary;
use crate::post::application::domain::entities::{Comment, Post};
use crate::post::application::ports::outgoing::{
    CommentView, NewComment, NewPost, PostCard, PostChanges, PostDetail, PostListFilter,
    PostQuery, PostQueryError, PostRepository, PostRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockPostQuery {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub accounts: Vec<Account>,
    pub breeds: Vec<Breed>,
    pub circles: Vec<Circle>,
    pub fail: bool,
}

impl MockPostQuery {
    pub fn with(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_breeds(mut self, breeds: Vec<Breed>) -> Self {
        self.breeds = breeds;
        self
    }

    pub fn with_circles(mut self, circles: Vec<Circle>) -> Self {
        self.circles = circles;
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), PostQueryError> {
        if self.fail {
            Err(PostQueryError::DatabaseError("db down".to_string()))
        } else {
            Ok(())
        }
    }

    fn username(&self, user_id: UserId) -> String {
        self.accounts
            .iter()
            .find(|a| a.id == user_id)
            .map(|a| a.username.clone())
            .unwrap_or_else(|| user_id.to_string())
    }

    fn card(&self, post: &Post) -> PostCard {
        let circle = post.circle_id.and_then(|id| {
            self.circles
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.slug_name.clone())
        });
        PostCard::from_post(post, self.username(post.user_id), circle)
    }
}

#[async_trait]
impl PostQuery for MockPostQuery {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, PostQueryError> {
        self.check()?;
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn detail(&self, post: &Post) -> Result<PostDetail, PostQueryError> {
        self.check()?;
        let user = self
            .accounts
            .iter()
            .find(|a| a.id == post.user_id)
            .map(|a| AccountSummary::from_account(a, 0, 0))
            .ok_or_else(|| PostQueryError::DatabaseError("unknown user".to_string()))?;
        let breed = self
            .breeds
            .iter()
            .find(|b| b.id == post.breed_id)
            .map(BreedView::from)
            .ok_or_else(|| PostQueryError::DatabaseError("unknown breed".to_string()))?;
        let circle = post.circle_id.and_then(|id| {
            self.circles
                .iter()
                .find(|c| c.id == id)
                .map(|c| CircleSummary::from_circle(c, 0))
        });

        Ok(PostDetail::new(post, user, circle, breed))
    }

    async fn list_cards(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, PostQueryError> {
        self.check()?;
        let items: Vec<PostCard> = self
            .posts
            .iter()
            .filter(|p| filter.tag.map_or(true, |t| p.tag == t))
            .filter(|p| filter.state.map_or(true, |s| p.state == s))
            .filter(|p| filter.user_id.map_or(true, |u| p.user_id == u))
            .filter(|p| filter.circle_id.map_or(true, |c| p.circle_id == Some(c)))
            .map(|p| self.card(p))
            .collect();
        let total = items.len() as u64;

        Ok(PageResult::new(items, page, total))
    }

    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, PostQueryError> {
        self.check()?;
        Ok(self
            .comments
            .iter()
            .find(|c| c.id == comment_id && c.post_id == post_id)
            .cloned())
    }

    async fn comment_view(&self, comment: &Comment) -> Result<CommentView, PostQueryError> {
        self.check()?;
        Ok(CommentView::from_comment(comment, self.username(comment.user_id)))
    }

    async fn list_comments(
        &self,
        post_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentView>, PostQueryError> {
        self.check()?;
        let items: Vec<CommentView> = self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|c| CommentView::from_comment(c, self.username(c.user_id)))
            .collect();
        let total = items.len() as u64;

        Ok(PageResult::new(items, page, total))
    }
}

// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockPostRepository {
    pub fail_with: Option<PostRepositoryError>,
    /// Posts known to `update_post`.
    pub posts: Vec<Post>,
    pub created: Mutex<Vec<NewPost>>,
    pub updated: Mutex<Vec<(Uuid, PostChanges)>>,
    pub deleted: Mutex<Vec<Uuid>>,
    pub comments_created: Mutex<Vec<NewComment>>,
    pub comments_deleted: Mutex<Vec<Uuid>>,
}

impl MockPostRepository {
    pub fn with(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }

    pub fn failing(err: PostRepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), PostRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn create_post(&self, data: NewPost) -> Result<Post, PostRepositoryError> {
        self.check()?;
        self.created.lock().unwrap().push(data.clone());
        let now = Utc::now();

        Ok(Post {
            id: Uuid::new_v4(),
            breed_id: data.breed_id,
            user_id: data.user_id,
            circle_id: data.circle_id,
            name: data.name,
            information: data.information,
            tag: data.tag,
            state: data.state,
            color_primary: data.color_primary,
            color_secondary: data.color_secondary,
            size: data.size,
            photo_first: data.photo_first,
            photo_second: data.photo_second,
            photo_third: data.photo_third,
            latitude: data.latitude,
            longitude: data.longitude,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_post(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Post, PostRepositoryError> {
        self.check()?;
        self.updated.lock().unwrap().push((id, changes.clone()));
        let mut post = self
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PostRepositoryError::NotFound)?;

        if let Some(breed_id) = changes.breed_id {
            post.breed_id = breed_id;
        }
        if let Some(circle_id) = changes.circle_id {
            post.circle_id = circle_id;
        }
        if let Some(name) = changes.name {
            post.name = name;
        }
        if let Some(information) = changes.information {
            post.information = information;
        }
        if let Some(tag) = changes.tag {
            post.tag = tag;
        }
        if let Some(state) = changes.state {
            post.state = state;
        }
        if let Some(color) = changes.color_primary {
            post.color_primary = color;
        }
        if let Some(color) = changes.color_secondary {
            post.color_secondary = color;
        }
        if let Some(size) = changes.size {
            post.size = size;
        }
        if let Some(photo) = changes.photo_first {
            post.photo_first = photo;
        }
        if let Some(photo) = changes.photo_second {
            post.photo_second = photo;
        }
        if let Some(photo) = changes.photo_third {
            post.photo_third = photo;
        }
        if let Some(latitude) = changes.latitude {
            post.latitude = latitude;
        }
        if let Some(longitude) = changes.longitude {
            post.longitude = longitude;
        }
        post.updated_at = Utc::now();

        Ok(post)
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), PostRepositoryError> {
        self.check()?;
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    async fn create_comment(&self, data: NewComment) -> Result<Comment, PostRepositoryError> {
        self.check()?;
        self.comments_created.lock().unwrap().push(data.clone());

        Ok(Comment {
            id: Uuid::new_v4(),
            post_id: data.post_id,
            user_id: data.user_id,
            content: data.content,
            created_at: Utc::now(),
        })
    }

    async fn delete_comment(&self, id: Uuid) -> Result<(), PostRepositoryError> {
        self.check()?;
        self.comments_deleted.lock().unwrap().push(id);
        Ok(())
    }
}
