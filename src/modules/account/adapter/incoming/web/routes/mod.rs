mod confirm_account;
mod deactivate_account;
mod get_profile;
mod list_accounts;
mod login;
mod sign_up;
mod update_account;

pub use confirm_account::{confirm_account_handler, ConfirmAccountRequest};
pub use deactivate_account::deactivate_account_handler;
pub use get_profile::get_profile_handler;
pub use list_accounts::{list_accounts_handler, ListAccountsQuery};
pub use login::{login_handler, LoginRequest};
pub use sign_up::{sign_up_handler, SignUpRequest};
pub use update_account::{update_account_handler, UpdateAccountRequest};
pub use confirm_account::__path_confirm_account_handler;
pub use deactivate_account::__path_deactivate_account_handler;
pub use get_profile::__path_get_profile_handler;
pub use list_accounts::__path_list_accounts_handler;
pub use login::__path_login_handler;
pub use sign_up::__path_sign_up_handler;
pub use update_account::__path_update_account_handler;
