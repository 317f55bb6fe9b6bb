pub mod follow;
pub mod get_following;
pub mod list_followers;
pub mod list_follows;
pub mod unfollow;

pub use follow::{FollowCommand, FollowError, FollowUseCase};
pub use get_following::{GetFollowingError, GetFollowingUseCase};
pub use list_followers::{ListFollowersError, ListFollowersUseCase};
pub use list_follows::{ListFollowsError, ListFollowsUseCase};
pub use unfollow::{UnfollowCommand, UnfollowError, UnfollowUseCase};
