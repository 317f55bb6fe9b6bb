use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::ErrorResponse;
use crate::following::application::ports::incoming::use_cases::{
    UnfollowCommand, UnfollowError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_unfollow_error(err: UnfollowError) -> HttpResponse {
    match err {
        UnfollowError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        UnfollowError::FollowingNotFound => {
            ApiResponse::not_found("FOLLOWING_NOT_FOUND", "Following not found")
        }
        UnfollowError::Forbidden(denial) => ApiResponse::denied(&denial),
        UnfollowError::RepositoryError(e) => {
            error!(error = %e, "Unfollow failed");
            ApiResponse::internal_error()
        }
    }
}

/// Remove a following
///
/// Only the follower may remove it.
#[utoipa::path(
    delete,
    path = "/api/accounts/{username}/follows/{followed}",
    tag = "followings",
    params(
        ("username" = String, Path, description = "Follower username"),
        ("followed" = String, Path, description = "Followed username"),
    ),
    responses(
        (status = 204, description = "Following removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the follower", body = ErrorResponse),
        (status = 404, description = "Account or following not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/accounts/{username}/follows/{followed}")]
pub async fn unfollow_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (username, followed) = path.into_inner();
    let command = UnfollowCommand {
        requester: user.user_id,
        username,
        followed,
    };
    let (follower, followed) = (command.username.clone(), command.followed.clone());

    match data.following.unfollow.execute(command).await {
        Ok(()) => {
            info!(follower = %follower, followed = %followed, "Following removed");
            ApiResponse::no_content()
        }
        Err(err) => map_unfollow_error(err),
    }
}
