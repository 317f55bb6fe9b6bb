pub mod confirm_account;
pub mod deactivate_account;
pub mod get_profile;
pub mod list_accounts;
pub mod login;
pub mod sign_up;
pub mod update_account;

pub use confirm_account::{ConfirmAccountCommand, ConfirmAccountError, ConfirmAccountUseCase};
pub use deactivate_account::{
    DeactivateAccountCommand, DeactivateAccountError, DeactivateAccountUseCase,
};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use list_accounts::{ListAccountsError, ListAccountsUseCase};
pub use login::{LoginCommand, LoginError, LoginResult, LoginUseCase};
pub use sign_up::{SignUpCommand, SignUpError, SignUpUseCase};
pub use update_account::{
    UpdateAccountCommand, UpdateAccountError, UpdateAccountInput, UpdateAccountUseCase,
};
