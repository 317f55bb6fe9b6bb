pub mod account_query_postgres;
pub mod account_repository_postgres;
pub mod account_summaries;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;

pub use account_query_postgres::AccountQueryPostgres;
pub use account_repository_postgres::AccountRepositoryPostgres;
