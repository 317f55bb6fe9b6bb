use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Select,
};
use uuid::Uuid;

use crate::account::adapter::outgoing::account_summaries::summaries_by_id;
use crate::account::adapter::outgoing::sea_orm_entity::users;
use crate::breed::adapter::outgoing::sea_orm_entity::breeds;
use crate::breed::application::ports::outgoing::BreedView;
use crate::circle::adapter::outgoing::circle_summaries::circle_summaries_by_id;
use crate::post::application::domain::entities::{Comment, Post};
use crate::post::application::ports::outgoing::{
    CommentView, PostCard, PostDetail, PostListFilter, PostQuery, PostQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::post_cards::{cards, usernames};
use super::sea_orm_entity::comments::{self, Entity as CommentEntity};
use super::sea_orm_entity::posts::{self, Entity as PostEntity, StateKind, TagKind};

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_error(e: DbErr) -> PostQueryError {
        PostQueryError::DatabaseError(e.to_string())
    }

    /// Posts of active authors matching every given criterion, newest first.
    fn list_select(filter: &PostListFilter) -> Select<PostEntity> {
        let active_users = users::Entity::find()
            .select_only()
            .column(users::Column::Id)
            .filter(users::Column::IsActive.eq(true))
            .into_query();

        let mut select = PostEntity::find().filter(posts::Column::UserId.in_subquery(active_users));

        if let Some(tag) = filter.tag {
            select = select.filter(posts::Column::Tag.eq(TagKind::from(tag)));
        }
        if let Some(state) = filter.state {
            select = select.filter(posts::Column::State.eq(StateKind::from(state)));
        }
        if let Some(user_id) = filter.user_id {
            select = select.filter(posts::Column::UserId.eq(Uuid::from(user_id)));
        }
        if let Some(circle_id) = filter.circle_id {
            select = select.filter(posts::Column::CircleId.eq(Uuid::from(circle_id)));
        }

        select
            .order_by_desc(posts::Column::CreatedAt)
            .order_by_desc(posts::Column::Id)
    }

    async fn username_of(&self, user_id: Uuid) -> Result<String, PostQueryError> {
        let mut names = usernames(&*self.db, vec![user_id])
            .await
            .map_err(Self::db_error)?;

        names
            .remove(&user_id)
            .ok_or_else(|| PostQueryError::DatabaseError(format!("user {user_id} missing")))
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let model = PostEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn detail(&self, post: &Post) -> Result<PostDetail, PostQueryError> {
        let user_id: Uuid = post.user_id.into();

        let mut users = summaries_by_id(&*self.db, vec![user_id])
            .await
            .map_err(Self::db_error)?;
        let user = users
            .remove(&user_id)
            .ok_or_else(|| PostQueryError::DatabaseError(format!("user {user_id} missing")))?;

        let circle = match post.circle_id {
            Some(circle_id) => {
                let circle_id: Uuid = circle_id.into();
                circle_summaries_by_id(&*self.db, vec![circle_id])
                    .await
                    .map_err(Self::db_error)?
                    .remove(&circle_id)
            }
            None => None,
        };

        let breed = breeds::Entity::find_by_id(post.breed_id)
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?
            .ok_or_else(|| {
                PostQueryError::DatabaseError(format!("breed {} missing", post.breed_id))
            })?;

        Ok(PostDetail::new(
            post,
            user,
            circle,
            BreedView::from(&breed.to_domain()),
        ))
    }

    async fn list_cards(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostCard>, PostQueryError> {
        let select = Self::list_select(&filter);

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let models = select
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let items = cards(&*self.db, &models).await.map_err(Self::db_error)?;

        Ok(PageResult::new(items, page, total))
    }

    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, PostQueryError> {
        let model = CommentEntity::find_by_id(comment_id)
            .filter(comments::Column::PostId.eq(post_id))
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn comment_view(&self, comment: &Comment) -> Result<CommentView, PostQueryError> {
        let username = self.username_of(comment.user_id.into()).await?;
        Ok(CommentView::from_comment(comment, username))
    }

    async fn list_comments(
        &self,
        post_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentView>, PostQueryError> {
        let select = CommentEntity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id);

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let models = select
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let mut author_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();
        author_ids.sort();
        author_ids.dedup();
        let names = usernames(&*self.db, author_ids)
            .await
            .map_err(Self::db_error)?;

        let items = models
            .iter()
            .map(|m| {
                let username = names.get(&m.user_id).cloned().unwrap_or_default();
                CommentView::from_comment(&m.to_domain(), username)
            })
            .collect();

        Ok(PageResult::new(items, page, total))
    }
}
