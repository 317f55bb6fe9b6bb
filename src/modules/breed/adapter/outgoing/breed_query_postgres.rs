use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::breed::application::domain::entities::Breed;
use crate::breed::application::ports::outgoing::{
    BreedListFilter, BreedOrderField, BreedQuery, BreedQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::breeds::{self, AnimalKind, Entity as BreedEntity};

#[derive(Clone, Debug)]
pub struct BreedQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BreedQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_error(e: DbErr) -> BreedQueryError {
        BreedQueryError::DatabaseError(e.to_string())
    }

    fn list_select(filter: &BreedListFilter) -> Select<BreedEntity> {
        let mut select = BreedEntity::find();

        if let Some(animal) = filter.animal {
            select = select.filter(breeds::Column::Animal.eq(AnimalKind::from(animal)));
        }

        let order = if filter.ordering.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        match filter.ordering.field {
            BreedOrderField::Name => select.order_by(breeds::Column::Name, order),
            BreedOrderField::Animal => select
                .order_by(breeds::Column::Animal, order)
                .order_by_asc(breeds::Column::Name),
        }
    }
}

#[async_trait]
impl BreedQuery for BreedQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Breed>, BreedQueryError> {
        let model = BreedEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn list(
        &self,
        filter: BreedListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Breed>, BreedQueryError> {
        let select = Self::list_select(&filter);

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let models = select
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let items = models.iter().map(|m| m.to_domain()).collect();

        Ok(PageResult::new(items, page, total))
    }
}
