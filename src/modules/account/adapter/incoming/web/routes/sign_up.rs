use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::account::application::ports::incoming::use_cases::{SignUpCommand, SignUpError};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for account sign-up
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SignUpRequest {
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "+593987654321")]
    pub phone: Option<String>,

    /// At least 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,

    #[schema(example = "SecurePass123!")]
    pub password_confirmation: String,
}

fn map_sign_up_error(err: SignUpError) -> HttpResponse {
    match err {
        SignUpError::Validation(errors) => ApiResponse::validation_error(&errors),
        other => {
            error!(error = %other, "Account sign-up failed");
            ApiResponse::internal_error()
        }
    }
}

/// Create an account
///
/// Creates an unconfirmed account and mails a confirmation link to it.
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = "accounts",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AccountSummary>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "A user with this email already exists.",
                    "fields": { "email": ["A user with this email already exists."] }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts")]
pub async fn sign_up_handler(
    req: web::Json<SignUpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match SignUpCommand::new(
        &req.username,
        &req.email,
        &req.first_name,
        &req.last_name,
        req.phone.as_deref(),
        &req.password,
        &req.password_confirmation,
    ) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.register_account_orchestrator.register(command).await {
        Ok(account) => {
            info!(username = %account.username, "Account created");
            ApiResponse::created(account)
        }
        Err(err) => map_sign_up_error(err),
    }
}
