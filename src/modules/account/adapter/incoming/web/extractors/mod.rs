pub mod auth;

pub use auth::{AuthenticatedUser, RequestAuthenticator};
