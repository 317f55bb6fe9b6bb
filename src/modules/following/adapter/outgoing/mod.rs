pub mod following_query_postgres;
pub mod following_repository_postgres;
pub mod sea_orm_entity;

pub use following_query_postgres::FollowingQueryPostgres;
pub use following_repository_postgres::FollowingRepositoryPostgres;
