pub mod circle_query;
pub mod circle_repository;

pub use circle_query::{
    CircleDetail, CircleListFilter, CircleOrderField, CircleQuery, CircleQueryError,
    CircleSummary, MemberView, SubscriptionDetail,
};
pub use circle_repository::{CircleChanges, CircleRepository, CircleRepositoryError, NewCircle};
