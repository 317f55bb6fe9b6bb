pub mod get_breed_service;
pub mod list_breeds_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use get_breed_service::GetBreedService;
pub use list_breeds_service::ListBreedsService;
