pub mod following_query;
pub mod following_repository;

pub use following_query::{FollowingDetail, FollowingQuery, FollowingQueryError};
pub use following_repository::{FollowingRepository, FollowingRepositoryError};
