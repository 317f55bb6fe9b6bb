use actix_web::{get, web, Responder};
use tracing::error;

use crate::account::application::ports::incoming::use_cases::GetProfileError;
use crate::account::application::ports::outgoing::AccountProfile;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Account profile with follows, followers, circles and recent posts
#[utoipa::path(
    get,
    path = "/api/accounts/{username}",
    tag = "accounts",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Account profile", body = inline(SuccessResponse<AccountProfile>)),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/accounts/{username}")]
pub async fn get_profile_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.account.get_profile.execute(&username).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(GetProfileError::RepositoryError(e)) => {
            error!(username = %username, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::account::application::ports::incoming::use_cases::GetProfileUseCase;
    use crate::account::application::ports::outgoing::AccountSummary;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::read_json;

    struct MockProfile;

    #[async_trait]
    impl GetProfileUseCase for MockProfile {
        async fn execute(&self, username: &str) -> Result<AccountProfile, GetProfileError> {
            if username != "ana" {
                return Err(GetProfileError::AccountNotFound);
            }
            Ok(AccountProfile {
                account: AccountSummary::from_account(&account("ana"), 1, 0),
                follows: vec![AccountSummary::from_account(&account("bob"), 0, 1)],
                followers: vec![],
                subscriptions: vec![],
                posts: vec![],
            })
        }
    }

    #[actix_web::test]
    async fn profile_is_flattened_summary_with_lists() {
        let state = TestAppStateBuilder::default()
            .with_get_profile(MockProfile)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_profile_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/accounts/ana").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["username"], "ana");
        assert_eq!(json["data"]["number_of_follows"], 1);
        assert_eq!(json["data"]["follows"][0]["username"], "bob");
        assert!(json["data"]["posts"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unknown_username_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_get_profile(MockProfile)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_profile_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/accounts/ghost").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "ACCOUNT_NOT_FOUND");
    }
}
