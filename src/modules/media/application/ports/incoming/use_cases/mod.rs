pub mod upload_image;

pub use upload_image::{StoredImage, UploadImageCommand, UploadImageError, UploadImageUseCase};
