pub mod create_circle;
pub mod deactivate_circle;
pub mod get_circle;
pub mod get_subscription;
pub mod list_circle_posts;
pub mod list_circles;
pub mod list_subscriptions;
pub mod subscribe;
pub mod unsubscribe;
pub mod update_circle;

pub use create_circle::{CreateCircleCommand, CreateCircleError, CreateCircleInput, CreateCircleUseCase};
pub use deactivate_circle::{
    DeactivateCircleCommand, DeactivateCircleError, DeactivateCircleUseCase,
};
pub use get_circle::{GetCircleError, GetCircleUseCase};
pub use get_subscription::{GetSubscriptionError, GetSubscriptionUseCase};
pub use list_circle_posts::{ListCirclePostsError, ListCirclePostsUseCase};
pub use list_circles::{ListCirclesError, ListCirclesUseCase};
pub use list_subscriptions::{ListSubscriptionsError, ListSubscriptionsUseCase};
pub use subscribe::{SubscribeCommand, SubscribeError, SubscribeUseCase};
pub use unsubscribe::{UnsubscribeCommand, UnsubscribeError, UnsubscribeUseCase};
pub use update_circle::{UpdateCircleCommand, UpdateCircleError, UpdateCircleInput, UpdateCircleUseCase};
