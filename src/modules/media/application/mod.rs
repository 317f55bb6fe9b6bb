pub mod domain;
pub mod media_use_cases;
pub mod ports;
pub mod services;

pub use media_use_cases::MediaUseCases;
