use sea_orm::entity::prelude::*;

use crate::account::application::domain::entities::UserId;
use crate::following::application::domain::entities::Following;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "followings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followed_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Following {
        Following {
            id: self.id,
            follower_id: UserId::from(self.follower_id),
            followed_id: UserId::from(self.followed_id),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::account::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::FollowerId",
        to = "crate::account::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "crate::account::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::FollowedId",
        to = "crate::account::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Followed,
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
