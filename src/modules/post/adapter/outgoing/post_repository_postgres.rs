use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use crate::post::application::domain::entities::{Comment, Post};
use crate::post::application::ports::outgoing::{
    NewComment, NewPost, PostChanges, PostRepository, PostRepositoryError,
};

use super::sea_orm_entity::comments::{ActiveModel as CommentActiveModel, Entity as CommentEntity};
use super::sea_orm_entity::posts::{ActiveModel as PostActiveModel, ColorKind, Entity as PostEntity};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> PostRepositoryError {
        match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => PostRepositoryError::NotFound,
            // Comment insert raced a post delete.
            ref err if err.to_string().contains("fk_comments_post_id") => {
                PostRepositoryError::NotFound
            }
            other => PostRepositoryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: NewPost) -> Result<Post, PostRepositoryError> {
        let active = PostActiveModel {
            id: Set(Uuid::new_v4()),
            breed_id: Set(data.breed_id),
            user_id: Set(data.user_id.into()),
            circle_id: Set(data.circle_id.map(Uuid::from)),
            name: Set(data.name),
            information: Set(data.information),
            tag: Set(data.tag.into()),
            state: Set(data.state.into()),
            color_primary: Set(data.color_primary.into()),
            color_secondary: Set(data.color_secondary.map(ColorKind::from)),
            size: Set(data.size.into()),
            photo_first: Set(data.photo_first),
            photo_second: Set(data.photo_second),
            photo_third: Set(data.photo_third),
            latitude: Set(data.latitude),
            longitude: Set(data.longitude),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_post(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Post, PostRepositoryError> {
        let mut active = PostActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(breed_id) = changes.breed_id {
            active.breed_id = Set(breed_id);
        }
        if let Some(circle_id) = changes.circle_id {
            active.circle_id = Set(circle_id.map(Uuid::from));
        }
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(information) = changes.information {
            active.information = Set(information);
        }
        if let Some(tag) = changes.tag {
            active.tag = Set(tag.into());
        }
        if let Some(state) = changes.state {
            active.state = Set(state.into());
        }
        if let Some(color) = changes.color_primary {
            active.color_primary = Set(color.into());
        }
        if let Some(color) = changes.color_secondary {
            active.color_secondary = Set(color.map(ColorKind::from));
        }
        if let Some(size) = changes.size {
            active.size = Set(size.into());
        }
        if let Some(photo) = changes.photo_first {
            active.photo_first = Set(photo);
        }
        if let Some(photo) = changes.photo_second {
            active.photo_second = Set(photo);
        }
        if let Some(photo) = changes.photo_third {
            active.photo_third = Set(photo);
        }
        if let Some(latitude) = changes.latitude {
            active.latitude = Set(latitude);
        }
        if let Some(longitude) = changes.longitude {
            active.longitude = Set(longitude);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_domain())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), PostRepositoryError> {
        // fk_comments_post_id cascades to the comments.
        let result = PostEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn create_comment(&self, data: NewComment) -> Result<Comment, PostRepositoryError> {
        let active = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(data.post_id),
            user_id: Set(data.user_id.into()),
            content: Set(data.content),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn delete_comment(&self, id: Uuid) -> Result<(), PostRepositoryError> {
        let result = CommentEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }

        Ok(())
    }
}
