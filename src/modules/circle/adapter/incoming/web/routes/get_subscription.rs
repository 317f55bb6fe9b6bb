use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::incoming::use_cases::GetSubscriptionError;
use crate::circle::application::ports::outgoing::SubscriptionDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_get_error(err: GetSubscriptionError) -> HttpResponse {
    match err {
        GetSubscriptionError::CircleNotFound => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        GetSubscriptionError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        GetSubscriptionError::SubscriptionNotFound => {
            ApiResponse::not_found("SUBSCRIPTION_NOT_FOUND", "Subscription not found")
        }
        GetSubscriptionError::RepositoryError(e) => {
            error!(error = %e, "Failed to load subscription");
            ApiResponse::internal_error()
        }
    }
}

/// A member's subscription to a circle
#[utoipa::path(
    get,
    path = "/api/circles/{slug_name}/subscriptions/{username}",
    tag = "circles",
    params(
        ("slug_name" = String, Path, description = "Circle slug name"),
        ("username" = String, Path, description = "Member username"),
    ),
    responses(
        (status = 200, description = "Subscription", body = inline(SuccessResponse<SubscriptionDetail>)),
        (status = 404, description = "Circle, account or subscription not found", body = ErrorResponse),
    )
)]
#[get("/api/circles/{slug_name}/subscriptions/{username}")]
pub async fn get_subscription_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (slug_name, username) = path.into_inner();

    match data
        .circle
        .get_subscription
        .execute(&slug_name, &username)
        .await
    {
        Ok(detail) => ApiResponse::success(detail),
        Err(err) => map_get_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::account::application::ports::outgoing::AccountSummary;
    use crate::circle::application::domain::policies::test_fixtures::circle;
    use crate::circle::application::ports::incoming::use_cases::GetSubscriptionUseCase;
    use crate::circle::application::ports::outgoing::CircleSummary;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::read_json;

    struct MockGet;

    #[async_trait]
    impl GetSubscriptionUseCase for MockGet {
        async fn execute(
            &self,
            slug_name: &str,
            username: &str,
        ) -> Result<SubscriptionDetail, GetSubscriptionError> {
            if username != "ana" {
                return Err(GetSubscriptionError::SubscriptionNotFound);
            }
            Ok(SubscriptionDetail {
                user: AccountSummary::from_account(&account(username), 0, 0),
                circle: CircleSummary::from_circle(&circle(slug_name), 1),
                is_admin: true,
                created_at: Utc::now(),
            })
        }
    }

    async fn get(uri: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_get_subscription(MockGet)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_subscription_handler)).await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn returns_subscription() {
        let resp = get("/api/circles/quito/subscriptions/ana").await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["is_admin"], true);
    }

    #[actix_web::test]
    async fn non_member_is_not_found() {
        let resp = get("/api/circles/quito/subscriptions/bob").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "SUBSCRIPTION_NOT_FOUND");
    }
}
