use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::ErrorResponse;
use crate::circle::application::ports::incoming::use_cases::{
    DeactivateCircleCommand, DeactivateCircleError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_deactivate_error(err: DeactivateCircleError) -> HttpResponse {
    match err {
        DeactivateCircleError::CircleNotFound => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        DeactivateCircleError::Forbidden(denial) => ApiResponse::denied(&denial),
        DeactivateCircleError::RepositoryError(e) => {
            error!(error = %e, "Circle deactivation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Deactivate a circle
///
/// The circle disappears from listings; its rows are kept.
#[utoipa::path(
    delete,
    path = "/api/circles/{slug_name}",
    tag = "circles",
    params(("slug_name" = String, Path, description = "Circle slug name")),
    responses(
        (status = 204, description = "Circle deactivated"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not a circle admin", body = ErrorResponse),
        (status = 404, description = "Circle not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/circles/{slug_name}")]
pub async fn deactivate_circle_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug_name = path.into_inner();
    let command = DeactivateCircleCommand {
        requester: user.user_id,
        slug_name: slug_name.clone(),
    };

    match data.circle.deactivate.execute(command).await {
        Ok(()) => {
            info!(slug_name = %slug_name, "Circle deactivated");
            ApiResponse::no_content()
        }
        Err(err) => map_deactivate_error(err),
    }
}
