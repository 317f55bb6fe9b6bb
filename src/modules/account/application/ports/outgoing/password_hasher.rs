use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash password")]
    HashFailed,

    /// The stored hash is not a valid PHC string.
    #[error("Stored password hash is malformed")]
    VerifyFailed,

    #[error("Hashing task panicked or was cancelled")]
    TaskFailed,
}

/// One-way password hashing for stored credentials.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Returns a PHC-format hash with a fresh salt.
    async fn hash(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a wrong password; `Err` only when `stored` cannot be parsed.
    async fn verify(&self, password: &str, stored: &str) -> Result<bool, HashError>;
}
