pub mod confirm_account_service;
pub mod deactivate_account_service;
pub mod get_profile_service;
pub mod list_accounts_service;
pub mod login_service;
pub mod sign_up_service;
pub mod update_account_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use confirm_account_service::ConfirmAccountService;
pub use deactivate_account_service::DeactivateAccountService;
pub use get_profile_service::GetProfileService;
pub use list_accounts_service::ListAccountsService;
pub use login_service::LoginService;
pub use sign_up_service::SignUpService;
pub use update_account_service::UpdateAccountService;
