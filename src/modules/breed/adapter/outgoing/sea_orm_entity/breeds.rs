use sea_orm::entity::prelude::*;

use crate::breed::application::domain::entities::{Animal, Breed};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "breeds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub animal: AnimalKind,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum AnimalKind {
    #[sea_orm(string_value = "dog")]
    Dog,
    #[sea_orm(string_value = "cat")]
    Cat,
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<AnimalKind> for Animal {
    fn from(kind: AnimalKind) -> Self {
        match kind {
            AnimalKind::Dog => Animal::Dog,
            AnimalKind::Cat => Animal::Cat,
            AnimalKind::Other => Animal::Other,
        }
    }
}

impl From<Animal> for AnimalKind {
    fn from(animal: Animal) -> Self {
        match animal {
            Animal::Dog => AnimalKind::Dog,
            Animal::Cat => AnimalKind::Cat,
            Animal::Other => AnimalKind::Other,
        }
    }
}

impl Model {
    pub fn to_domain(&self) -> Breed {
        Breed {
            id: self.id,
            animal: self.animal.into(),
            name: self.name.clone(),
            description: self.description.clone(),
            photo: self.photo.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
