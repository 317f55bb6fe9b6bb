pub mod circle_use_cases;
pub mod domain;
pub mod helpers;
pub mod ports;
pub mod services;

pub use circle_use_cases::CircleUseCases;
