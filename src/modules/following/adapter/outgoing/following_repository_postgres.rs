use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::following::application::domain::entities::Following;
use crate::following::application::ports::outgoing::{
    FollowingRepository, FollowingRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::followings::{ActiveModel, Entity as FollowingEntity};

#[derive(Clone, Debug)]
pub struct FollowingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowingRepository for FollowingRepositoryPostgres {
    async fn create_following(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Following, FollowingRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            follower_id: Set(follower_id.into()),
            followed_id: Set(followed_id.into()),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(|e: DbErr| {
            if is_unique_violation(&e) {
                FollowingRepositoryError::AlreadyExists
            } else {
                FollowingRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_domain())
    }

    async fn delete_following(&self, id: Uuid) -> Result<(), FollowingRepositoryError> {
        let result = FollowingEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| FollowingRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(FollowingRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::following::adapter::outgoing::sea_orm_entity::followings::fixtures::following_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    #[tokio::test]
    async fn create_following_returns_domain() {
        let (follower, followed) = (Uuid::new_v4(), Uuid::new_v4());
        let model = following_model(follower, followed);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repo = FollowingRepositoryPostgres::new(Arc::new(db));

        let following = repo
            .create_following(UserId::from(follower), UserId::from(followed))
            .await
            .unwrap();

        assert_eq!(following.id, model.id);
        assert_eq!(following.follower_id, UserId::from(follower));
    }

    #[tokio::test]
    async fn duplicate_following_maps_to_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"uq_followings_follower_followed\""
                    .to_string(),
            ))])
            .into_connection();
        let repo = FollowingRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_following(UserId::from(Uuid::new_v4()), UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(result.unwrap_err(), FollowingRepositoryError::AlreadyExists);
    }

    #[tokio::test]
    async fn deleting_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = FollowingRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.delete_following(Uuid::new_v4()).await.unwrap_err(),
            FollowingRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn delete_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = FollowingRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_following(Uuid::new_v4()).await.is_ok());
    }
}
