use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::account::application::ports::incoming::use_cases::{
    DeactivateAccountCommand, DeactivateAccountError,
};
use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_deactivate_error(err: DeactivateAccountError) -> HttpResponse {
    match err {
        DeactivateAccountError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        DeactivateAccountError::Forbidden(denial) => ApiResponse::denied(&denial),
        DeactivateAccountError::RepositoryError(e) => {
            error!(error = %e, "Account deactivation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Deactivate an account
///
/// The account is kept but hidden from listings and can no longer log in.
#[utoipa::path(
    delete,
    path = "/api/accounts/{username}",
    tag = "accounts",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 204, description = "Account deactivated"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/accounts/{username}")]
pub async fn deactivate_account_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = DeactivateAccountCommand {
        requester: user.user_id,
        username: path.into_inner(),
    };
    let username = command.username.clone();

    match data.account.deactivate.execute(command).await {
        Ok(()) => {
            info!(username = %username, "Account deactivated");
            ApiResponse::no_content()
        }
        Err(err) => map_deactivate_error(err),
    }
}
