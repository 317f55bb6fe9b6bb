use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use tracing::error;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::{Circle, CircleId, Subscription};
use crate::circle::application::ports::outgoing::{
    CircleChanges, CircleRepository, CircleRepositoryError, NewCircle,
};
use crate::shared::db::violates;

use super::sea_orm_entity::circles::ActiveModel as CircleActiveModel;
use super::sea_orm_entity::subscriptions::{
    ActiveModel as SubscriptionActiveModel, Entity as SubscriptionEntity,
};

#[derive(Clone, Debug)]
pub struct CircleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CircleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> CircleRepositoryError {
        match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => CircleRepositoryError::NotFound,
            ref err if violates(err, "uq_circles_slug_name") => {
                CircleRepositoryError::SlugAlreadyExists
            }
            ref err if violates(err, "uq_subscriptions_user_circle") => {
                CircleRepositoryError::SubscriptionAlreadyExists
            }
            other => CircleRepositoryError::DatabaseError(other.to_string()),
        }
    }

    fn subscription(user_id: UserId, circle_id: Uuid, is_admin: bool) -> SubscriptionActiveModel {
        SubscriptionActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.into()),
            circle_id: Set(circle_id),
            is_admin: Set(is_admin),
            ..Default::default()
        }
    }
}

#[async_trait]
impl CircleRepository for CircleRepositoryPostgres {
    async fn create_circle(
        &self,
        creator: UserId,
        data: NewCircle,
    ) -> Result<Circle, CircleRepositoryError> {
        // Returning early drops `txn`, which rolls it back.
        let txn = self.db.begin().await.map_err(Self::map_write_error)?;

        let circle_id = Uuid::new_v4();
        let active = CircleActiveModel {
            id: Set(circle_id),
            name: Set(data.name),
            slug_name: Set(data.slug_name),
            profile_photo: Set(data.profile_photo),
            cover_photo: Set(data.cover_photo),
            about: Set(data.about),
            is_verified: Set(false),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted = active.insert(&txn).await.map_err(Self::map_write_error)?;

        if let Err(e) = Self::subscription(creator, circle_id, true).insert(&txn).await {
            error!(circle_id = %circle_id, error = %e, "Failed to add circle admin");
            return Err(Self::map_write_error(e));
        }

        txn.commit().await.map_err(Self::map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_circle(
        &self,
        id: CircleId,
        changes: CircleChanges,
    ) -> Result<Circle, CircleRepositoryError> {
        let mut active = CircleActiveModel {
            id: Set(id.into()),
            ..Default::default()
        };

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(slug_name) = changes.slug_name {
            active.slug_name = Set(slug_name);
        }
        if let Some(about) = changes.about {
            active.about = Set(about);
        }
        if let Some(photo) = changes.profile_photo {
            active.profile_photo = Set(photo);
        }
        if let Some(photo) = changes.cover_photo {
            active.cover_photo = Set(photo);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_domain())
    }

    async fn deactivate_circle(&self, id: CircleId) -> Result<(), CircleRepositoryError> {
        let active = CircleActiveModel {
            id: Set(id.into()),
            is_active: Set(false),
            ..Default::default()
        };

        active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(())
    }

    async fn create_subscription(
        &self,
        user_id: UserId,
        circle_id: CircleId,
        is_admin: bool,
    ) -> Result<Subscription, CircleRepositoryError> {
        let inserted = Self::subscription(user_id, circle_id.into(), is_admin)
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn delete_subscription(&self, id: Uuid) -> Result<(), CircleRepositoryError> {
        let result = SubscriptionEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        if result.rows_affected == 0 {
            return Err(CircleRepositoryError::NotFound);
        }

        Ok(())
    }
}
