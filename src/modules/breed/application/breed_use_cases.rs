use std::sync::Arc;

use crate::breed::application::ports::incoming::use_cases::{GetBreedUseCase, ListBreedsUseCase};

#[derive(Clone)]
pub struct BreedUseCases {
    pub list: Arc<dyn ListBreedsUseCase + Send + Sync>,
    pub get: Arc<dyn GetBreedUseCase + Send + Sync>,
}
