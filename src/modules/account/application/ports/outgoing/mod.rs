pub mod account_query;
pub mod account_repository;
pub mod password_hasher;
pub mod token_provider;

pub use account_query::{
    AccountListFilter, AccountOrderField, AccountProfile, AccountQuery, AccountQueryError,
    AccountSummary, MembershipView,
};
pub use account_repository::{
    AccountChanges, AccountRepository, AccountRepositoryError, NewAccount,
};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{AccessClaims, ConfirmationClaims, TokenError, TokenProvider};
