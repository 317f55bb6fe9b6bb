use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::GetPostError;
use crate::post::application::ports::outgoing::PostDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(super) const POST_NOT_FOUND: &str = "POST_NOT_FOUND";

/// Post detail with author, circle and breed
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = inline(SuccessResponse<PostDetail>)),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[get("/api/posts/{id}")]
pub async fn get_post_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get.execute(post_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetPostError::PostNotFound) => ApiResponse::not_found(POST_NOT_FOUND, "Post not found"),
        Err(GetPostError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to load post");
            ApiResponse::internal_error()
        }
    }
}
