use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::following::application::ports::incoming::use_cases::{FollowCommand, FollowError};
use crate::following::application::ports::outgoing::FollowingDetail;
use crate::shared::api::ApiResponse;
use crate::shared::validation::NON_FIELD_ERRORS;
use crate::AppState;

fn map_follow_error(err: FollowError) -> HttpResponse {
    match err {
        FollowError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        FollowError::SelfFollow => ApiResponse::field_error(
            "SELF_FOLLOW",
            NON_FIELD_ERRORS,
            "A user cannot follow yourself.",
        ),
        FollowError::AlreadyExists => ApiResponse::field_error(
            "FOLLOWING_ALREADY_EXISTS",
            NON_FIELD_ERRORS,
            "This following already exist.",
        ),
        FollowError::RepositoryError(e) => {
            error!(error = %e, "Follow failed");
            ApiResponse::internal_error()
        }
    }
}

/// Follow an account
///
/// The authenticated user becomes a follower of `{username}`.
#[utoipa::path(
    post,
    path = "/api/accounts/{username}/follows",
    tag = "followings",
    params(("username" = String, Path, description = "Account to follow")),
    responses(
        (status = 201, description = "Following created", body = inline(SuccessResponse<FollowingDetail>)),
        (status = 400, description = "Self follow or duplicate", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/accounts/{username}/follows")]
pub async fn follow_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = FollowCommand {
        requester: user.user_id,
        username: path.into_inner(),
    };

    match data.following.follow.execute(command).await {
        Ok(detail) => {
            info!(
                follower = %detail.follower.username,
                followed = %detail.followed.username,
                "Following created"
            );
            ApiResponse::created(detail)
        }
        Err(err) => map_follow_error(err),
    }
}
