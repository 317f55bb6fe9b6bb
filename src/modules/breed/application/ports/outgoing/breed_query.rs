use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::breed::application::domain::entities::{Animal, Breed};
use crate::shared::pagination::{Ordering, PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BreedView {
    pub id: Uuid,
    pub name: Option<String>,
    pub animal: Animal,
    #[schema(example = "Dog")]
    pub display_animal: String,
    pub photo: Option<String>,
    pub description: Option<String>,
}

impl From<&Breed> for BreedView {
    fn from(breed: &Breed) -> Self {
        Self {
            id: breed.id,
            name: breed.name.clone(),
            animal: breed.animal,
            display_animal: breed.animal.display_name().to_string(),
            photo: breed.photo.clone(),
            description: breed.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedOrderField {
    Name,
    Animal,
}

impl FromStr for BreedOrderField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "animal" => Ok(Self::Animal),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreedListFilter {
    pub animal: Option<Animal>,
    pub ordering: Ordering<BreedOrderField>,
}

impl Default for BreedListFilter {
    fn default() -> Self {
        Self {
            animal: None,
            ordering: Ordering::asc(BreedOrderField::Name),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BreedQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BreedQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Breed>, BreedQueryError>;

    async fn list(
        &self,
        filter: BreedListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Breed>, BreedQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::application::domain::entities::test_fixtures::breed;

    #[test]
    fn view_carries_display_animal() {
        let view = BreedView::from(&breed(Animal::Dog, "Husky"));

        assert_eq!(view.display_animal, "Dog");
        assert_eq!(view.name.as_deref(), Some("Husky"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["animal"], "dog");
    }
}
