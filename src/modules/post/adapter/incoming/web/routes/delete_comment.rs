use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::ErrorResponse;
use crate::post::application::ports::incoming::use_cases::{
    DeleteCommentCommand, DeleteCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_post::POST_NOT_FOUND;

/// Delete own comment
#[utoipa::path(
    delete,
    path = "/api/posts/{id}/comments/{comment_id}",
    tag = "comments",
    params(
        ("id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id"),
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the comment owner", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/posts/{id}/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();
    let command = DeleteCommentCommand {
        requester: user.user_id,
        post_id,
        comment_id,
    };

    match data.post.delete_comment.execute(command).await {
        Ok(()) => {
            info!(post_id = %post_id, comment_id = %comment_id, "Comment deleted");
            ApiResponse::no_content()
        }
        Err(DeleteCommentError::PostNotFound) => {
            ApiResponse::not_found(POST_NOT_FOUND, "Post not found")
        }
        Err(DeleteCommentError::CommentNotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(DeleteCommentError::Forbidden(denial)) => ApiResponse::denied(&denial),
        Err(DeleteCommentError::RepositoryError(e)) => {
            error!(comment_id = %comment_id, error = %e, "Comment deletion failed");
            ApiResponse::internal_error()
        }
    }
}
