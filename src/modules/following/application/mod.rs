pub mod domain;
pub mod following_use_cases;
pub mod ports;
pub mod services;

pub use following_use_cases::FollowingUseCases;
