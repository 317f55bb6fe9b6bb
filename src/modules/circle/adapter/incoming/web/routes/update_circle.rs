use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::incoming::use_cases::{
    UpdateCircleCommand, UpdateCircleError, UpdateCircleInput,
};
use crate::circle::application::ports::outgoing::CircleSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial update; an empty string clears an optional field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCircleRequest {
    pub name: Option<String>,
    pub slug_name: Option<String>,
    pub about: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
}

impl From<UpdateCircleRequest> for UpdateCircleInput {
    fn from(req: UpdateCircleRequest) -> Self {
        Self {
            name: req.name,
            slug_name: req.slug_name,
            about: req.about,
            profile_photo: req.profile_photo,
            cover_photo: req.cover_photo,
        }
    }
}

fn map_update_error(err: UpdateCircleError) -> HttpResponse {
    match err {
        UpdateCircleError::CircleNotFound => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        UpdateCircleError::Forbidden(denial) => ApiResponse::denied(&denial),
        UpdateCircleError::Validation(errors) => ApiResponse::validation_error(&errors),
        UpdateCircleError::RepositoryError(e) => {
            error!(error = %e, "Circle update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update a circle
///
/// Restricted to circle admins.
#[utoipa::path(
    patch,
    path = "/api/circles/{slug_name}",
    tag = "circles",
    params(("slug_name" = String, Path, description = "Circle slug name")),
    request_body = UpdateCircleRequest,
    responses(
        (status = 200, description = "Circle updated", body = inline(SuccessResponse<CircleSummary>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not a circle admin", body = ErrorResponse),
        (status = 404, description = "Circle not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/circles/{slug_name}")]
pub async fn update_circle_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateCircleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug_name = path.into_inner();

    let command = match UpdateCircleCommand::new(user.user_id, &slug_name, req.into_inner().into())
    {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.circle.update.execute(command).await {
        Ok(summary) => {
            info!(slug_name = %summary.slug_name, "Circle updated");
            ApiResponse::success(summary)
        }
        Err(err) => map_update_error(err),
    }
}
