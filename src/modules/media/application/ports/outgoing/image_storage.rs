use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageStorageError {
    #[error("I/O error: {0}")]
    Io(String),
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Writes `bytes` at `relative_path`. Writing the same path twice is not an error.
    async fn store(&self, relative_path: &str, bytes: &[u8]) -> Result<(), ImageStorageError>;
}
