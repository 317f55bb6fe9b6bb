use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::account::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::ErrorResponse;
use crate::circle::application::ports::incoming::use_cases::{
    UnsubscribeCommand, UnsubscribeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_unsubscribe_error(err: UnsubscribeError) -> HttpResponse {
    match err {
        UnsubscribeError::CircleNotFound => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        UnsubscribeError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        UnsubscribeError::SubscriptionNotFound => {
            ApiResponse::not_found("SUBSCRIPTION_NOT_FOUND", "Subscription not found")
        }
        UnsubscribeError::Forbidden(denial) => ApiResponse::denied(&denial),
        UnsubscribeError::RepositoryError(e) => {
            error!(error = %e, "Unsubscribe failed");
            ApiResponse::internal_error()
        }
    }
}

/// Leave a circle
///
/// Only the subscribed user may remove the subscription.
#[utoipa::path(
    delete,
    path = "/api/circles/{slug_name}/subscriptions/{username}",
    tag = "circles",
    params(
        ("slug_name" = String, Path, description = "Circle slug name"),
        ("username" = String, Path, description = "Member username"),
    ),
    responses(
        (status = 204, description = "Subscription removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the subscription owner", body = ErrorResponse),
        (status = 404, description = "Circle, account or subscription not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/circles/{slug_name}/subscriptions/{username}")]
pub async fn unsubscribe_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (slug_name, username) = path.into_inner();
    let command = UnsubscribeCommand {
        requester: user.user_id,
        slug_name: slug_name.clone(),
        username: username.clone(),
    };

    match data.circle.unsubscribe.execute(command).await {
        Ok(()) => {
            info!(circle = %slug_name, username = %username, "Subscription removed");
            ApiResponse::no_content()
        }
        Err(err) => map_unsubscribe_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::circle::application::domain::policies::NOT_SUBSCRIPTION_OWNER;
    use crate::circle::application::ports::incoming::use_cases::UnsubscribeUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, read_json, token_data};

    struct MockUnsubscribe(Result<(), UnsubscribeError>);

    #[async_trait]
    impl UnsubscribeUseCase for MockUnsubscribe {
        async fn execute(&self, command: UnsubscribeCommand) -> Result<(), UnsubscribeError> {
            assert_eq!(command.slug_name, "quito");
            assert_eq!(command.username, "ana");
            self.0.clone()
        }
    }

    async fn call(result: Result<(), UnsubscribeError>) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_unsubscribe(MockUnsubscribe(result))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(Uuid::new_v4()))
                .service(unsubscribe_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/circles/quito/subscriptions/ana")
            .insert_header(bearer())
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn owner_leaves_circle() {
        assert_eq!(call(Ok(())).await.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn other_user_is_forbidden() {
        let resp = call(Err(UnsubscribeError::Forbidden(NOT_SUBSCRIPTION_OWNER))).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], NOT_SUBSCRIPTION_OWNER.code);
    }
}
