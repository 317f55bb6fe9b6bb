use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::account::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginResult,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            ApiResponse::bad_request("INVALID_CREDENTIALS", "Invalid credentials.")
        }
        LoginError::AccountNotConfirmed => ApiResponse::bad_request(
            "ACCOUNT_NOT_CONFIRMED",
            "The email for this account has not yet been confirmed.",
        ),
        other => {
            error!(error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with email and password
///
/// Returns the account summary and an access token.
#[utoipa::path(
    post,
    path = "/api/accounts/login",
    tag = "accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = inline(SuccessResponse<LoginResult>)),
        (
            status = 400,
            description = "Invalid credentials or unconfirmed account",
            body = ErrorResponse,
            examples(
                ("Invalid credentials" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials." }
                }))),
                ("Not confirmed" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "ACCOUNT_NOT_CONFIRMED",
                        "message": "The email for this account has not yet been confirmed."
                    }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match LoginCommand::new(&req.email, &req.password) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.account.login.execute(command).await {
        Ok(result) => {
            info!(username = %result.user.username, "Login successful");
            ApiResponse::success(result)
        }
        Err(err) => {
            warn!(email = %req.email, error = %err, "Login rejected");
            map_login_error(err)
        }
    }
}
