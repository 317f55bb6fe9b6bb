use sea_orm::entity::prelude::*;

use crate::circle::application::domain::entities::{Circle, CircleId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "circles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug_name: String,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Circle {
        Circle {
            id: CircleId::from(self.id),
            name: self.name.clone(),
            slug_name: self.slug_name.clone(),
            profile_photo: self.profile_photo.clone(),
            cover_photo: self.cover_photo.clone(),
            about: self.about.clone(),
            is_verified: self.is_verified,
            is_active: self.is_active,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subscriptions::Entity")]
    Subscriptions,
}

impl Related<super::subscriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

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
