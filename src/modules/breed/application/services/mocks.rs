use async_trait::async_trait;
use uuid::Uuid;

use crate::breed::application::domain::entities::Breed;
use crate::breed::application::ports::outgoing::{
    BreedListFilter, BreedOrderField, BreedQuery, BreedQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Default)]
pub struct MockBreedQuery {
    pub breeds: Vec<Breed>,
    pub fail: bool,
}

impl MockBreedQuery {
    pub fn with(breeds: Vec<Breed>) -> Self {
        Self {
            breeds,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            breeds: vec![],
            fail: true,
        }
    }

    fn check(&self) -> Result<(), BreedQueryError> {
        if self.fail {
            Err(BreedQueryError::DatabaseError("db down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BreedQuery for MockBreedQuery {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Breed>, BreedQueryError> {
        self.check()?;
        Ok(self.breeds.iter().find(|b| b.id == id).cloned())
    }

    async fn list(
        &self,
        filter: BreedListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Breed>, BreedQueryError> {
        self.check()?;
        let mut items: Vec<Breed> = self
            .breeds
            .iter()
            .filter(|b| filter.animal.map_or(true, |a| a == b.animal))
            .cloned()
            .collect();

        match filter.ordering.field {
            BreedOrderField::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
            BreedOrderField::Animal => items.sort_by_key(|b| b.animal.as_str()),
        }
        if filter.ordering.descending {
            items.reverse();
        }

        let total = items.len() as u64;
        Ok(PageResult::new(items, page, total))
    }
}
