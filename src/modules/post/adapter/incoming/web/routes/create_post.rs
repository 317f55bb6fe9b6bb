use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostInput,
};
use crate::post::application::ports::outgoing::PostDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    /// Breed id
    pub breed: String,
    /// Circle slug name
    pub circle: Option<String>,
    #[schema(example = "Firulais")]
    pub name: Option<String>,
    pub information: String,
    #[schema(example = "lost")]
    pub tag: String,
    #[schema(example = "open")]
    pub state: Option<String>,
    #[schema(example = "brown")]
    pub color_primary: String,
    pub color_secondary: Option<String>,
    #[schema(example = "m")]
    pub size: String,
    /// Path returned by the media upload endpoint
    pub photo_first: String,
    pub photo_second: Option<String>,
    pub photo_third: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<CreatePostRequest> for CreatePostInput {
    fn from(req: CreatePostRequest) -> Self {
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

fn map_create_error(err: CreatePostError) -> HttpResponse {
    match err {
        CreatePostError::Validation(errors) => ApiResponse::validation_error(&errors),
        CreatePostError::Forbidden(denial) => ApiResponse::denied(&denial),
        CreatePostError::RepositoryError(e) => {
            error!(error = %e, "Post creation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Publish a post
///
/// Posting into a circle requires being subscribed to it.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<PostDetail>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not a member of the circle", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreatePostCommand::new(user.user_id, req.into_inner().into()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.post.create.execute(command).await {
        Ok(detail) => {
            info!(post_id = %detail.id, user_id = %user.user_id, "Post created");
            ApiResponse::created(detail)
        }
        Err(err) => map_create_error(err),
    }
}
