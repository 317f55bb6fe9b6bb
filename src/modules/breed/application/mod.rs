pub mod breed_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use breed_use_cases::BreedUseCases;
