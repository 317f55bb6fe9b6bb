use sea_orm::entity::prelude::*;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::{CircleId, Subscription};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub circle_id: Uuid,
    pub is_admin: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Subscription {
        Subscription {
            id: self.id,
            user_id: UserId::from(self.user_id),
            circle_id: CircleId::from(self.circle_id),
            is_admin: self.is_admin,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::account::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::account::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::circles::Entity",
        from = "Column::CircleId",
        to = "super::circles::Column::Id",
        on_delete = "Cascade"
    )]
    Circle,
}

impl Related<super::circles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Circle.def()
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
