pub mod follow_service;
pub mod get_following_service;
pub mod list_followers_service;
pub mod list_follows_service;
pub mod unfollow_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use follow_service::FollowService;
pub use get_following_service::GetFollowingService;
pub use list_followers_service::ListFollowersService;
pub use list_follows_service::ListFollowsService;
pub use unfollow_service::UnfollowService;
