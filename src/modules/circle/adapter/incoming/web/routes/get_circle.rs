use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::incoming::use_cases::GetCircleError;
use crate::circle::application::ports::outgoing::CircleDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a circle with its first members
#[utoipa::path(
    get,
    path = "/api/circles/{slug_name}",
    tag = "circles",
    params(("slug_name" = String, Path, description = "Circle slug name")),
    responses(
        (status = 200, description = "Circle detail", body = inline(SuccessResponse<CircleDetail>)),
        (status = 404, description = "Circle not found", body = ErrorResponse),
    )
)]
#[get("/api/circles/{slug_name}")]
pub async fn get_circle_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug_name = path.into_inner();

    match data.circle.get.execute(&slug_name).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetCircleError::CircleNotFound) => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        Err(GetCircleError::RepositoryError(e)) => {
            error!(slug_name = %slug_name, error = %e, "Failed to load circle");
            ApiResponse::internal_error()
        }
    }
}
