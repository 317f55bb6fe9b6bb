use sea_orm::entity::prelude::*;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::CircleId;
use crate::post::application::domain::entities::{Color, PetSize, Post, PostState, PostTag};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub breed_id: Uuid,
    pub user_id: Uuid,
    pub circle_id: Option<Uuid>,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub information: String,
    pub tag: TagKind,
    pub state: StateKind,
    pub color_primary: ColorKind,
    pub color_secondary: Option<ColorKind>,
    pub size: SizeKind,
    pub photo_first: String,
    pub photo_second: Option<String>,
    pub photo_third: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TagKind {
    #[sea_orm(string_value = "lost")]
    Lost,
    #[sea_orm(string_value = "found")]
    Found,
    #[sea_orm(string_value = "adoption")]
    Adoption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum StateKind {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "finished")]
    Finished,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum ColorKind {
    #[sea_orm(string_value = "black")]
    Black,
    #[sea_orm(string_value = "white")]
    White,
    #[sea_orm(string_value = "gray")]
    Gray,
    #[sea_orm(string_value = "brown")]
    Brown,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum SizeKind {
    #[sea_orm(string_value = "s")]
    Small,
    #[sea_orm(string_value = "m")]
    Medium,
    #[sea_orm(string_value = "b")]
    Big,
}

/// Two-way mapping between a column enum and its domain twin.
macro_rules! mirror {
    ($kind:ident <=> $domain:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$kind> for $domain {
            fn from(kind: $kind) -> Self {
                match kind {
                    $($kind::$variant => $domain::$variant,)+
                }
            }
        }

        impl From<$domain> for $kind {
            fn from(value: $domain) -> Self {
                match value {
                    $($domain::$variant => $kind::$variant,)+
                }
            }
        }
    };
}

mirror!(TagKind <=> PostTag { Lost, Found, Adoption });
mirror!(StateKind <=> PostState { Open, Finished, Cancelled });
mirror!(ColorKind <=> Color { Black, White, Gray, Brown, Other });
mirror!(SizeKind <=> PetSize { Small, Medium, Big });

impl Model {
    pub fn to_domain(&self) -> Post {
        Post {
            id: self.id,
            breed_id: self.breed_id,
            user_id: UserId::from(self.user_id),
            circle_id: self.circle_id.map(CircleId::from),
            name: self.name.clone(),
            information: self.information.clone(),
            tag: self.tag.into(),
            state: self.state.into(),
            color_primary: self.color_primary.into(),
            color_secondary: self.color_secondary.map(Color::from),
            size: self.size.into(),
            photo_first: self.photo_first.clone(),
            photo_second: self.photo_second.clone(),
            photo_third: self.photo_third.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
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
        belongs_to = "crate::circle::adapter::outgoing::sea_orm_entity::circles::Entity",
        from = "Column::CircleId",
        to = "crate::circle::adapter::outgoing::sea_orm_entity::circles::Column::Id",
        on_delete = "SetNull"
    )]
    Circle,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
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
