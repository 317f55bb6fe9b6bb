use actix_web::{get, web, Responder};
use tracing::error;

use crate::account::application::ports::outgoing::AccountSummary;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::following::application::ports::incoming::use_cases::ListFollowersError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageResult};
use crate::AppState;

/// Accounts following the user
#[utoipa::path(
    get,
    path = "/api/accounts/{username}/followers",
    tag = "followings",
    params(("username" = String, Path, description = "Account username"), PageQuery),
    responses(
        (status = 200, description = "Page of accounts", body = inline(SuccessResponse<PageResult<AccountSummary>>)),
        (status = 404, description = "Account not found", body = ErrorResponse),
    )
)]
#[get("/api/accounts/{username}/followers")]
pub async fn list_followers_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data
        .following
        .list_followers
        .execute(&username, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListFollowersError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(ListFollowersError::RepositoryError(e)) => {
            error!(username = %username, error = %e, "Failed to list followers");
            ApiResponse::internal_error()
        }
    }
}
