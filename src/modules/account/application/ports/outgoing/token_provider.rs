use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const CONFIRMATION_TOKEN_TYPE: &str = "email_confirmation";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Bearer token carried on authenticated requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
    pub is_confirmed: bool,
}

/// Token mailed on sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationClaims {
    pub username: String,
    #[serde(rename = "type", default)]
    pub token_type: String,
    pub exp: i64,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: UserId, is_confirmed: bool)
        -> Result<String, TokenError>;

    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError>;

    fn generate_confirmation_token(&self, username: &str) -> Result<String, TokenError>;

    /// Checks signature and expiry only; the caller decides on `token_type`.
    fn verify_confirmation_token(&self, token: &str) -> Result<ConfirmationClaims, TokenError>;
}
