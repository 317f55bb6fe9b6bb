use sea_orm::entity::prelude::*;

use crate::account::application::domain::entities::{Account, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    pub profile_photo: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub is_active: bool,
    pub is_confirmed: bool,
    pub is_verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Account {
        Account {
            id: UserId::from(self.id),
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            biography: self.biography.clone(),
            profile_photo: self.profile_photo.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            is_active: self.is_active,
            is_confirmed: self.is_confirmed,
            is_verified: self.is_verified,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            let mut model = self;
            if !insert {
                model.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
            }
            Ok(model)
        }

        #[cfg(not(feature = "no_db_triggers"))]
        {
            let _ = insert;
            Ok(self)
        }
    }
}
