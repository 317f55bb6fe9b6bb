use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::{
    UpdatePostCommand, UpdatePostError, UpdatePostInput,
};
use crate::post::application::ports::outgoing::PostDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_post::POST_NOT_FOUND;

/// Partial update; an empty string clears an optional field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub breed: Option<String>,
    pub circle: Option<String>,
    pub name: Option<String>,
    pub information: Option<String>,
    pub tag: Option<String>,
    pub state: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub size: Option<String>,
    pub photo_first: Option<String>,
    pub photo_second: Option<String>,
    pub photo_third: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<UpdatePostRequest> for UpdatePostInput {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            breed: req.breed,
            circle: req.circle,
            name: req.name,
            information: req.information,
            tag: req.tag,
            state: req.state,
            color_primary: req.color_primary,
            color_secondary: req.color_secondary,
            size: req.size,
            photo_first: req.photo_first,
            photo_second: req.photo_second,
            photo_third: req.photo_third,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

fn map_update_error(err: UpdatePostError) -> HttpResponse {
    match err {
        UpdatePostError::PostNotFound => ApiResponse::not_found(POST_NOT_FOUND, "Post not found"),
        UpdatePostError::Forbidden(denial) => ApiResponse::denied(&denial),
        UpdatePostError::Validation(errors) => ApiResponse::validation_error(&errors),
        UpdatePostError::RepositoryError(e) => {
            error!(error = %e, "Post update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update a post
///
/// Restricted to the post owner.
#[utoipa::path(
    patch,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = inline(SuccessResponse<PostDetail>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the post owner", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/posts/{id}")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let command = match UpdatePostCommand::new(user.user_id, post_id, req.into_inner().into()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.post.update.execute(command).await {
        Ok(detail) => {
            info!(post_id = %post_id, "Post updated");
            ApiResponse::success(detail)
        }
        Err(err) => map_update_error(err),
    }
}
