pub mod breed_query_postgres;
pub mod sea_orm_entity;

pub use breed_query_postgres::BreedQueryPostgres;
