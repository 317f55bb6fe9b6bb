use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::incoming::use_cases::{SubscribeCommand, SubscribeError};
use crate::circle::application::ports::outgoing::SubscriptionDetail;
use crate::shared::api::ApiResponse;
use crate::shared::validation::NON_FIELD_ERRORS;
use crate::AppState;

fn map_subscribe_error(err: SubscribeError) -> HttpResponse {
    match err {
        SubscribeError::CircleNotFound => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        SubscribeError::AlreadyExists => ApiResponse::field_error(
            "SUBSCRIPTION_ALREADY_EXISTS",
            NON_FIELD_ERRORS,
            "This subscription already exists.",
        ),
        SubscribeError::RepositoryError(e) => {
            error!(error = %e, "Subscription failed");
            ApiResponse::internal_error()
        }
    }
}

/// Join a circle
///
/// The authenticated user joins as a regular member.
#[utoipa::path(
    post,
    path = "/api/circles/{slug_name}/subscriptions",
    tag = "circles",
    params(("slug_name" = String, Path, description = "Circle slug name")),
    responses(
        (status = 201, description = "Subscribed", body = inline(SuccessResponse<SubscriptionDetail>)),
        (status = 400, description = "Already subscribed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Circle not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/circles/{slug_name}/subscriptions")]
pub async fn subscribe_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = SubscribeCommand {
        requester: user.user_id,
        slug_name: path.into_inner(),
    };

    match data.circle.subscribe.execute(command).await {
        Ok(detail) => {
            info!(
                circle = %detail.circle.slug_name,
                username = %detail.user.username,
                "Subscription created"
            );
            ApiResponse::created(detail)
        }
        Err(err) => map_subscribe_error(err),
    }
}
