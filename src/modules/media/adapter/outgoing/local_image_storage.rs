use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::media::application::ports::outgoing::{ImageStorage, ImageStorageError};

/// Writes images below a root directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, relative_path: &str, bytes: &[u8]) -> Result<(), ImageStorageError> {
        let target = self.root.join(relative_path);

        if fs::try_exists(&target).await.unwrap_or(false) {
            return Ok(());
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ImageStorageError::Io(e.to_string()))?;
        }

        fs::write(&target, bytes)
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))
    }
}
