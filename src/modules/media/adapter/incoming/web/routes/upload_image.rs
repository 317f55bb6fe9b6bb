use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use futures::StreamExt;
use tracing::{error, info, warn};

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::media::application::domain::entities::ImageKind;
use crate::media::application::ports::incoming::use_cases::{
    StoredImage, UploadImageCommand, UploadImageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

const FILE_FIELD: &str = "file";

enum ReadError {
    TooLarge,
    Malformed(String),
}

/// Collects the `file` part, stopping once it exceeds `max_bytes`.
async fn read_file_field(
    payload: &mut Multipart,
    max_bytes: u64,
) -> Result<Option<Vec<u8>>, ReadError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ReadError::Malformed(e.to_string()))?;
        let is_file = field.name() == Some(FILE_FIELD);

        let mut buf = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk.map_err(|e| ReadError::Malformed(e.to_string()))?;
            if !is_file {
                continue;
            }
            if (buf.len() + bytes.len()) as u64 > max_bytes {
                return Err(ReadError::TooLarge);
            }
            buf.extend_from_slice(&bytes);
        }

        if is_file && file.is_none() {
            file = Some(buf);
        }
    }

    Ok(file)
}

/// Upload an image
///
/// Returns the relative path to store on an account, circle, breed or post.
#[utoipa::path(
    post,
    path = "/api/media/{kind}",
    tag = "media",
    params((
        "kind" = String,
        Path,
        description = "account-profile, circle-profile, circle-cover, post-photo or breed-photo"
    )),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 201, description = "Image stored", body = inline(SuccessResponse<StoredImage>)),
        (status = 400, description = "Missing file or unsupported type", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown image kind", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/media/{kind}")]
pub async fn upload_image_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(kind) = path.parse::<ImageKind>() else {
        return ApiResponse::not_found("UNKNOWN_IMAGE_KIND", "Unknown image kind");
    };

    let max_bytes = data.media.upload.max_bytes();

    let bytes = match read_file_field(&mut payload, max_bytes).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            return ApiResponse::bad_request("MISSING_FILE", "No file was submitted.");
        }
        Err(ReadError::TooLarge) => {
            return too_large(max_bytes);
        }
        Err(ReadError::Malformed(e)) => {
            warn!(user_id = %user.user_id, error = %e, "Malformed multipart body");
            return ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart body");
        }
    };

    let command = UploadImageCommand {
        uploader: user.user_id,
        kind,
        bytes,
    };

    match data.media.upload.execute(command).await {
        Ok(stored) => {
            info!(user_id = %user.user_id, path = %stored.path, "Image uploaded");
            ApiResponse::created(stored)
        }
        Err(UploadImageError::Empty) => {
            ApiResponse::bad_request("EMPTY_FILE", "The submitted file is empty.")
        }
        Err(UploadImageError::UnsupportedType) => ApiResponse::bad_request(
            "UNSUPPORTED_IMAGE_TYPE",
            "Upload a valid image. Allowed types: JPEG, PNG, WebP.",
        ),
        Err(UploadImageError::TooLarge { max_bytes }) => too_large(max_bytes),
        Err(UploadImageError::StorageError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Image storage failed");
            ApiResponse::internal_error()
        }
    }
}

fn too_large(max_bytes: u64) -> actix_web::HttpResponse {
    ApiResponse::payload_too_large(
        "FILE_TOO_LARGE",
        &format!("File too large (max {} bytes)", max_bytes),
    )
}
