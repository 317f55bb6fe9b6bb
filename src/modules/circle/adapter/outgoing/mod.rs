pub mod circle_query_postgres;
pub mod circle_repository_postgres;
pub mod circle_summaries;
pub mod sea_orm_entity;

pub use circle_query_postgres::CircleQueryPostgres;
pub use circle_repository_postgres::CircleRepositoryPostgres;
