use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, UserId};
use crate::account::application::ports::outgoing::{
    AccountChanges, AccountRepository, AccountRepositoryError, NewAccount,
};
use crate::shared::db::{is_unique_violation, violates};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> AccountRepositoryError {
        match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                AccountRepositoryError::AccountNotFound
            }
            ref err if violates(err, "uq_users_username") => {
                AccountRepositoryError::UsernameAlreadyExists
            }
            ref err if is_unique_violation(err) => AccountRepositoryError::EmailAlreadyExists,
            other => AccountRepositoryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(&self, data: NewAccount) -> Result<Account, AccountRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            phone: Set(data.phone),
            biography: Set(None),
            profile_photo: Set(None),
            latitude: Set(0.0),
            longitude: Set(0.0),
            is_active: Set(true),
            is_confirmed: Set(false),
            is_verified: Set(false),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_account(
        &self,
        id: UserId,
        changes: AccountChanges,
    ) -> Result<Account, AccountRepositoryError> {
        let mut active = UserActiveModel {
            id: Set(id.into()),
            ..Default::default()
        };

        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(username) = changes.username {
            active.username = Set(username);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(biography) = changes.biography {
            active.biography = Set(biography);
        }
        if let Some(photo) = changes.profile_photo {
            active.profile_photo = Set(photo);
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

    async fn mark_confirmed(&self, id: UserId) -> Result<(), AccountRepositoryError> {
        let active = UserActiveModel {
            id: Set(id.into()),
            is_confirmed: Set(true),
            ..Default::default()
        };

        active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(())
    }

    async fn deactivate_account(&self, id: UserId) -> Result<(), AccountRepositoryError> {
        let active = UserActiveModel {
            id: Set(id.into()),
            is_active: Set(false),
            ..Default::default()
        };

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        if updated.is_active {
            return Err(AccountRepositoryError::AccountNotFound);
        }

        Ok(())
    }
}
