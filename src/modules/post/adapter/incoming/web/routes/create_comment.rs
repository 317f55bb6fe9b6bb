use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError,
};
use crate::post::application::ports::outgoing::CommentView;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_post::POST_NOT_FOUND;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[schema(example = "I saw it this morning near the bakery")]
    pub content: String,
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    tag = "comments",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = inline(SuccessResponse<CommentView>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/posts/{id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let command = match CreateCommentCommand::new(user.user_id, post_id, &req.content) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.post.create_comment.execute(command).await {
        Ok(view) => {
            info!(post_id = %post_id, comment_id = %view.id, "Comment created");
            ApiResponse::created(view)
        }
        Err(CreateCommentError::PostNotFound) => {
            ApiResponse::not_found(POST_NOT_FOUND, "Post not found")
        }
        Err(CreateCommentError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Comment creation failed");
            ApiResponse::internal_error()
        }
    }
}
