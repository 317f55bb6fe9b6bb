use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::application::domain::entities::UserId;
use crate::media::application::domain::entities::{ImageFormat, ImageKind};

#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub uploader: UserId,
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StoredImage {
    /// Relative path to put in `profile_photo`, `photo_first`, etc.
    #[schema(example = "posts/pets/photos/9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08.jpg")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadImageError {
    #[error("The file is empty")]
    Empty,

    #[error("File too large (max {max_bytes} bytes)")]
    TooLarge { max_bytes: u64 },

    #[error("Unsupported image type")]
    UnsupportedType,

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl UploadImageCommand {
    /// Checks size and signature; returns the detected format.
    pub fn validate(&self, max_bytes: u64) -> Result<ImageFormat, UploadImageError> {
        if self.bytes.is_empty() {
            return Err(UploadImageError::Empty);
        }
        if self.bytes.len() as u64 > max_bytes {
            return Err(UploadImageError::TooLarge { max_bytes });
        }
        ImageFormat::sniff(&self.bytes).ok_or(UploadImageError::UnsupportedType)
    }
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    /// Upper bound the handler enforces while reading the body.
    fn max_bytes(&self) -> u64;

    async fn execute(&self, command: UploadImageCommand) -> Result<StoredImage, UploadImageError>;
}
