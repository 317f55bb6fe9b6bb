pub mod upload_image_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use upload_image_service::UploadImageService;
