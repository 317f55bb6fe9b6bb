pub mod breed_query;

pub use breed_query::{BreedListFilter, BreedOrderField, BreedQuery, BreedQueryError, BreedView};
