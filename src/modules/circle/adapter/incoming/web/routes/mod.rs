mod create_circle;
mod deactivate_circle;
mod get_circle;
mod get_subscription;
mod list_circle_posts;
mod list_circles;
mod list_subscriptions;
mod subscribe;
mod unsubscribe;
mod update_circle;

pub use create_circle::{create_circle_handler, CreateCircleRequest};
pub use deactivate_circle::deactivate_circle_handler;
pub use get_circle::get_circle_handler;
pub use get_subscription::get_subscription_handler;
pub use list_circle_posts::list_circle_posts_handler;
pub use list_circles::list_circles_handler;
pub use list_subscriptions::list_subscriptions_handler;
pub use subscribe::subscribe_handler;
pub use unsubscribe::unsubscribe_handler;
pub use update_circle::{update_circle_handler, UpdateCircleRequest};
pub use create_circle::__path_create_circle_handler;
pub use deactivate_circle::__path_deactivate_circle_handler;
pub use get_circle::__path_get_circle_handler;
pub use get_subscription::__path_get_subscription_handler;
pub use list_circle_posts::__path_list_circle_posts_handler;
pub use list_circles::__path_list_circles_handler;
pub use list_subscriptions::__path_list_subscriptions_handler;
pub use subscribe::__path_subscribe_handler;
pub use unsubscribe::__path_unsubscribe_handler;
pub use update_circle::__path_update_circle_handler;
