use std::sync::Mutex;

use async_trait::async_trait;

use crate::media::application::ports::outgoing::{ImageStorage, ImageStorageError};

/// Keeps stored files in memory.
#[derive(Default)]
pub struct MockImageStorage {
    pub stored: Mutex<Vec<(String, Vec<u8>)>>,
    pub fail: bool,
}

impl MockImageStorage {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.stored
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }
}

#[async_trait]
impl ImageStorage for MockImageStorage {
    async fn store(&self, relative_path: &str, bytes: &[u8]) -> Result<(), ImageStorageError> {
        if self.fail {
            return Err(ImageStorageError::Io("disk full".to_string()));
        }
        self.stored
            .lock()
            .unwrap()
            .push((relative_path.to_string(), bytes.to_vec()));
        Ok(())
    }
}
