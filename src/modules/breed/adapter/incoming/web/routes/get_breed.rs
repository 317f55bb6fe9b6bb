use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::breed::application::ports::incoming::use_cases::GetBreedError;
use crate::breed::application::ports::outgoing::BreedView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a breed
#[utoipa::path(
    get,
    path = "/api/general/breeds/{id}",
    tag = "breeds",
    params(("id" = Uuid, Path, description = "Breed id")),
    responses(
        (status = 200, description = "Breed", body = inline(SuccessResponse<BreedView>)),
        (status = 404, description = "Breed not found", body = ErrorResponse),
    )
)]
#[get("/api/general/breeds/{id}")]
pub async fn get_breed_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.breed.get.execute(id).await {
        Ok(breed) => ApiResponse::success(breed),
        Err(GetBreedError::BreedNotFound) => {
            ApiResponse::not_found("BREED_NOT_FOUND", "Breed not found")
        }
        Err(GetBreedError::RepositoryError(e)) => {
            error!(breed_id = %id, error = %e, "Failed to load breed");
            ApiResponse::internal_error()
        }
    }
}
