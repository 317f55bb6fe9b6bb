use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::media::application::ports::incoming::use_cases::{
    StoredImage, UploadImageCommand, UploadImageError, UploadImageUseCase,
};
use crate::media::application::ports::outgoing::ImageStorage;

pub struct UploadImageService<S>
where
    S: ImageStorage,
{
    storage: Arc<S>,
    max_bytes: u64,
}

impl<S> UploadImageService<S>
where
    S: ImageStorage,
{
    pub fn new(storage: Arc<S>, max_bytes: u64) -> Self {
        Self { storage, max_bytes }
    }
}

#[async_trait]
impl<S> UploadImageUseCase for UploadImageService<S>
where
    S: ImageStorage + Send + Sync,
{
    fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    async fn execute(&self, command: UploadImageCommand) -> Result<StoredImage, UploadImageError> {
        let format = command.validate(self.max_bytes)?;

        // Content-addressed: identical uploads land on the same path.
        let digest = format!("{:x}", Sha256::digest(&command.bytes));
        let path = format!("{}{}.{}", command.kind.prefix(), digest, format.extension());

        self.storage
            .store(&path, &command.bytes)
            .await
            .map_err(|e| UploadImageError::StorageError(e.to_string()))?;

        Ok(StoredImage { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::domain::entities::UserId;
    use crate::media::application::domain::entities::test_fixtures::{JPEG_BYTES, PNG_BYTES};
    use crate::media::application::domain::entities::ImageKind;
    use crate::media::application::services::mocks::MockImageStorage;
    use uuid::Uuid;

    fn command(kind: ImageKind, bytes: &[u8]) -> UploadImageCommand {
        UploadImageCommand {
            uploader: UserId::from(Uuid::new_v4()),
            kind,
            bytes: bytes.to_vec(),
        }
    }

    #[tokio::test]
    async fn stores_under_kind_prefix_with_hash_name() {
        let storage = Arc::new(MockImageStorage::default());
        let service = UploadImageService::new(storage.clone(), 1024);

        let stored = service
            .execute(command(ImageKind::PostPhoto, PNG_BYTES))
            .await
            .unwrap();

        let expected = format!("posts/pets/photos/{:x}.png", Sha256::digest(PNG_BYTES));
        assert_eq!(stored.path, expected);
        assert_eq!(storage.paths(), vec![expected]);
    }

    #[tokio::test]
    async fn same_content_gets_same_path() {
        let storage = Arc::new(MockImageStorage::default());
        let service = UploadImageService::new(storage.clone(), 1024);

        let first = service
            .execute(command(ImageKind::AccountProfile, JPEG_BYTES))
            .await
            .unwrap();
        let second = service
            .execute(command(ImageKind::AccountProfile, JPEG_BYTES))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(first.path.starts_with("accounts/profile_pictures/"));
        assert!(first.path.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn rejects_oversized_file() {
        let storage = Arc::new(MockImageStorage::default());
        let service = UploadImageService::new(storage.clone(), 4);

        let result = service.execute(command(ImageKind::PostPhoto, PNG_BYTES)).await;

        assert_eq!(result, Err(UploadImageError::TooLarge { max_bytes: 4 }));
        assert!(storage.paths().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_signature_and_empty_body() {
        let service = UploadImageService::new(Arc::new(MockImageStorage::default()), 1024);

        let gif = service
            .execute(command(ImageKind::BreedPhoto, b"GIF89a...."))
            .await;
        assert_eq!(gif, Err(UploadImageError::UnsupportedType));

        let empty = service.execute(command(ImageKind::BreedPhoto, b"")).await;
        assert_eq!(empty, Err(UploadImageError::Empty));
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let service = UploadImageService::new(Arc::new(MockImageStorage::failing()), 1024);

        let result = service.execute(command(ImageKind::CircleCover, PNG_BYTES)).await;

        assert!(matches!(result, Err(UploadImageError::StorageError(_))));
    }
}
