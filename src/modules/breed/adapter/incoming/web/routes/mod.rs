mod get_breed;
mod list_breeds;

pub use get_breed::get_breed_handler;
pub use list_breeds::{list_breeds_handler, ListBreedsQuery};
pub use get_breed::__path_get_breed_handler;
pub use list_breeds::__path_list_breeds_handler;
