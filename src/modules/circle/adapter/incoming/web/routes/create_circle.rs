use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::incoming::use_cases::{
    CreateCircleCommand, CreateCircleError, CreateCircleInput,
};
use crate::circle::application::ports::outgoing::CircleSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCircleRequest {
    #[schema(example = "Quito Rescue")]
    pub name: String,
    #[schema(example = "quito-rescue")]
    pub slug_name: String,
    pub about: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
}

impl From<CreateCircleRequest> for CreateCircleInput {
    fn from(req: CreateCircleRequest) -> Self {
        Self {
            name: req.name,
            slug_name: req.slug_name,
            about: req.about,
            profile_photo: req.profile_photo,
            cover_photo: req.cover_photo,
        }
    }
}

fn map_create_error(err: CreateCircleError) -> HttpResponse {
    match err {
        CreateCircleError::Validation(errors) => ApiResponse::validation_error(&errors),
        CreateCircleError::RepositoryError(e) => {
            error!(error = %e, "Circle creation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Create a circle
///
/// The creator is subscribed as its first admin.
#[utoipa::path(
    post,
    path = "/api/circles",
    tag = "circles",
    request_body = CreateCircleRequest,
    responses(
        (status = 201, description = "Circle created", body = inline(SuccessResponse<CircleSummary>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "A circle with this slugname already exists.",
                    "fields": {"slug_name": ["A circle with this slugname already exists."]}
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/circles")]
pub async fn create_circle_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCircleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateCircleCommand::new(user.user_id, req.into_inner().into()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.circle.create.execute(command).await {
        Ok(summary) => {
            info!(slug_name = %summary.slug_name, creator = %user.user_id, "Circle created");
            ApiResponse::created(summary)
        }
        Err(err) => map_create_error(err),
    }
}
