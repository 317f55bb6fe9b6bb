pub mod circles;
pub mod subscriptions;
