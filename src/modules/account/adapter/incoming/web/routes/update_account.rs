use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::account::application::ports::incoming::use_cases::{
    UpdateAccountCommand, UpdateAccountError, UpdateAccountInput,
};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial update; omitted fields are left as they are and an empty string
/// clears an optional field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub biography: Option<String>,
    /// Path returned by the media upload endpoint
    pub profile_photo: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<UpdateAccountRequest> for UpdateAccountInput {
    fn from(req: UpdateAccountRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            username: req.username,
            phone: req.phone,
            biography: req.biography,
            profile_photo: req.profile_photo,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

fn map_update_error(err: UpdateAccountError) -> HttpResponse {
    match err {
        UpdateAccountError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        UpdateAccountError::Forbidden(denial) => ApiResponse::denied(&denial),
        UpdateAccountError::Validation(errors) => ApiResponse::validation_error(&errors),
        UpdateAccountError::RepositoryError(e) => {
            error!(error = %e, "Account update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update an account
///
/// Only the confirmed owner of the account may update it.
#[utoipa::path(
    patch,
    path = "/api/accounts/{username}",
    tag = "accounts",
    params(("username" = String, Path, description = "Account username")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = inline(SuccessResponse<AccountSummary>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 403,
            description = "Not the owner, or not confirmed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "NOT_ACCOUNT_OWNER",
                    "message": "Only account owner can perform this action."
                }
            })
        ),
        (status = 404, description = "Account not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/accounts/{username}")]
pub async fn update_account_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    let command =
        match UpdateAccountCommand::new(user.user_id, &username, req.into_inner().into()) {
            Ok(command) => command,
            Err(errors) => return ApiResponse::validation_error(&errors),
        };

    match data.account.update.execute(command).await {
        Ok(summary) => {
            info!(username = %summary.username, "Account updated");
            ApiResponse::success(summary)
        }
        Err(err) => map_update_error(err),
    }
}
