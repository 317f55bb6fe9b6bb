use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::ErrorResponse;
use crate::post::application::ports::incoming::use_cases::{DeletePostCommand, DeletePostError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_post::POST_NOT_FOUND;

/// Delete a post and its comments
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the post owner", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = DeletePostCommand {
        requester: user.user_id,
        post_id: path.into_inner(),
    };
    let post_id = command.post_id;

    match data.post.delete.execute(command).await {
        Ok(()) => {
            info!(post_id = %post_id, user_id = %user.user_id, "Post deleted");
            ApiResponse::no_content()
        }
        Err(DeletePostError::PostNotFound) => {
            ApiResponse::not_found(POST_NOT_FOUND, "Post not found")
        }
        Err(DeletePostError::Forbidden(denial)) => ApiResponse::denied(&denial),
        Err(DeletePostError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Post deletion failed");
            ApiResponse::internal_error()
        }
    }
}
