use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::account::application::ports::incoming::use_cases::{
    ConfirmAccountCommand, ConfirmAccountError,
};
use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ConfirmAccountRequest {
    /// Token from the confirmation email
    pub token: String,
}

fn map_confirm_error(err: ConfirmAccountError) -> HttpResponse {
    match err {
        ConfirmAccountError::LinkExpired => {
            ApiResponse::field_error("LINK_EXPIRED", "token", "Link expired.")
        }
        ConfirmAccountError::InvalidToken => {
            ApiResponse::field_error("INVALID_TOKEN", "token", "Invalid token.")
        }
        ConfirmAccountError::AlreadyConfirmed => ApiResponse::field_error(
            "ALREADY_CONFIRMED",
            "token",
            "This email account is already confirmed.",
        ),
        ConfirmAccountError::RepositoryError(e) => {
            error!(error = %e, "Account confirmation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Confirm an account's email
#[utoipa::path(
    post,
    path = "/api/accounts/confirm",
    tag = "accounts",
    request_body = ConfirmAccountRequest,
    responses(
        (status = 204, description = "Account confirmed"),
        (
            status = 400,
            description = "Expired, invalid or already used token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "LINK_EXPIRED",
                    "message": "Link expired.",
                    "fields": { "token": ["Link expired."] }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/confirm")]
pub async fn confirm_account_handler(
    req: web::Json<ConfirmAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ConfirmAccountCommand::new(&req.token) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.account.confirm.execute(command).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_confirm_error(err),
    }
}
