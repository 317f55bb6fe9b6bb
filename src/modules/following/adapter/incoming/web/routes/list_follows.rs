use actix_web::{get, web, Responder};
use tracing::error;

use crate::account::application::ports::outgoing::AccountSummary;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::following::application::ports::incoming::use_cases::ListFollowsError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageResult};
use crate::AppState;

/// Accounts the user follows
#[utoipa::path(
    get,
    path = "/api/accounts/{username}/follows",
    tag = "followings",
    params(("username" = String, Path, description = "Account username"), PageQuery),
    responses(
        (status = 200, description = "Page of accounts", body = inline(SuccessResponse<PageResult<AccountSummary>>)),
        (status = 404, description = "Account not found", body = ErrorResponse),
    )
)]
#[get("/api/accounts/{username}/follows")]
pub async fn list_follows_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data
        .following
        .list_follows
        .execute(&username, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListFollowsError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(ListFollowsError::RepositoryError(e)) => {
            error!(username = %username, error = %e, "Failed to list follows");
            ApiResponse::internal_error()
        }
    }
}
