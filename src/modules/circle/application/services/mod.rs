pub mod create_circle_service;
pub mod deactivate_circle_service;
pub mod get_circle_service;
pub mod get_subscription_service;
pub mod list_circle_posts_service;
pub mod list_circles_service;
pub mod list_subscriptions_service;
pub mod subscribe_service;
pub mod unsubscribe_service;
pub mod update_circle_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use create_circle_service::CreateCircleService;
pub use deactivate_circle_service::DeactivateCircleService;
pub use get_circle_service::GetCircleService;
pub use get_subscription_service::GetSubscriptionService;
pub use list_circle_posts_service::ListCirclePostsService;
pub use list_circles_service::ListCirclesService;
pub use list_subscriptions_service::ListSubscriptionsService;
pub use subscribe_service::SubscribeService;
pub use unsubscribe_service::UnsubscribeService;
pub use update_circle_service::UpdateCircleService;
