use std::sync::Arc;

use crate::circle::application::ports::incoming::use_cases::{
    CreateCircleUseCase, DeactivateCircleUseCase, GetCircleUseCase, GetSubscriptionUseCase,
    ListCirclePostsUseCase, ListCirclesUseCase, ListSubscriptionsUseCase, SubscribeUseCase,
    UnsubscribeUseCase, UpdateCircleUseCase,
};

#[derive(Clone)]
pub struct CircleUseCases {
    pub create: Arc<dyn CreateCircleUseCase + Send + Sync>,
    pub list: Arc<dyn ListCirclesUseCase + Send + Sync>,
    pub get: Arc<dyn GetCircleUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCircleUseCase + Send + Sync>,
    pub deactivate: Arc<dyn DeactivateCircleUseCase + Send + Sync>,
    pub subscribe: Arc<dyn SubscribeUseCase + Send + Sync>,
    pub list_subscriptions: Arc<dyn ListSubscriptionsUseCase + Send + Sync>,
    pub get_subscription: Arc<dyn GetSubscriptionUseCase + Send + Sync>,
    pub unsubscribe: Arc<dyn UnsubscribeUseCase + Send + Sync>,
    pub list_posts: Arc<dyn ListCirclePostsUseCase + Send + Sync>,
}
