pub mod get_breed;
pub mod list_breeds;

pub use get_breed::{GetBreedError, GetBreedUseCase};
pub use list_breeds::{ListBreedsError, ListBreedsUseCase};
