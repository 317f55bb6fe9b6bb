use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::incoming::use_cases::ListCirclePostsError;
use crate::post::application::ports::outgoing::PostCard;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageResult};
use crate::AppState;

/// Posts published in a circle, newest first
#[utoipa::path(
    get,
    path = "/api/circles/{slug_name}/posts",
    tag = "circles",
    params(("slug_name" = String, Path, description = "Circle slug name"), PageQuery),
    responses(
        (status = 200, description = "Page of posts", body = inline(SuccessResponse<PageResult<PostCard>>)),
        (status = 404, description = "Circle not found", body = ErrorResponse),
    )
)]
#[get("/api/circles/{slug_name}/posts")]
pub async fn list_circle_posts_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug_name = path.into_inner();

    match data
        .circle
        .list_posts
        .execute(&slug_name, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListCirclePostsError::CircleNotFound) => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        Err(ListCirclePostsError::RepositoryError(e)) => {
            error!(slug_name = %slug_name, error = %e, "Failed to list circle posts");
            ApiResponse::internal_error()
        }
    }
}
