use std::sync::Arc;

use crate::following::application::ports::incoming::use_cases::{
    FollowUseCase, GetFollowingUseCase, ListFollowersUseCase, ListFollowsUseCase,
    UnfollowUseCase,
};

#[derive(Clone)]
pub struct FollowingUseCases {
    pub follow: Arc<dyn FollowUseCase + Send + Sync>,
    pub unfollow: Arc<dyn UnfollowUseCase + Send + Sync>,
    pub get: Arc<dyn GetFollowingUseCase + Send + Sync>,
    pub list_follows: Arc<dyn ListFollowsUseCase + Send + Sync>,
    pub list_followers: Arc<dyn ListFollowersUseCase + Send + Sync>,
}
