use std::sync::Arc;

use crate::account::application::ports::incoming::use_cases::{
    ConfirmAccountUseCase, DeactivateAccountUseCase, GetProfileUseCase, ListAccountsUseCase,
    LoginUseCase, UpdateAccountUseCase,
};

/// Account use cases placed in `AppState`. Sign-up goes through the
/// registration orchestrator instead.
#[derive(Clone)]
pub struct AccountUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub confirm: Arc<dyn ConfirmAccountUseCase + Send + Sync>,
    pub list: Arc<dyn ListAccountsUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAccountUseCase + Send + Sync>,
    pub deactivate: Arc<dyn DeactivateAccountUseCase + Send + Sync>,
}
