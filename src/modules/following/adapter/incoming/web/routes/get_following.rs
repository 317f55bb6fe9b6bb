use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::following::application::ports::incoming::use_cases::GetFollowingError;
use crate::following::application::ports::outgoing::FollowingDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a single following
#[utoipa::path(
    get,
    path = "/api/accounts/{username}/follows/{followed}",
    tag = "followings",
    params(
        ("username" = String, Path, description = "Follower username"),
        ("followed" = String, Path, description = "Followed username"),
    ),
    responses(
        (status = 200, description = "Following", body = inline(SuccessResponse<FollowingDetail>)),
        (status = 404, description = "Account or following not found", body = ErrorResponse),
    )
)]
#[get("/api/accounts/{username}/follows/{followed}")]
pub async fn get_following_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (username, followed) = path.into_inner();

    match data.following.get.execute(&username, &followed).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetFollowingError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(GetFollowingError::FollowingNotFound) => {
            ApiResponse::not_found("FOLLOWING_NOT_FOUND", "Following not found")
        }
        Err(GetFollowingError::RepositoryError(e)) => {
            error!(username = %username, followed = %followed, error = %e, "Failed to load following");
            ApiResponse::internal_error()
        }
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
    use crate::following::application::ports::incoming::use_cases::GetFollowingUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::read_json;

    struct MockGet;

    #[async_trait]
    impl GetFollowingUseCase for MockGet {
        async fn execute(
            &self,
            username: &str,
            followed: &str,
        ) -> Result<FollowingDetail, GetFollowingError> {
            if followed != "bob" {
                return Err(GetFollowingError::FollowingNotFound);
            }
            Ok(FollowingDetail {
                follower: AccountSummary::from_account(&account(username), 1, 0),
                followed: AccountSummary::from_account(&account(followed), 0, 1),
                created_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn returns_following_detail() {
        let state = TestAppStateBuilder::default().with_get_following(MockGet).build();
        let app =
            test::init_service(App::new().app_data(state).service(get_following_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/accounts/ana/follows/bob")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["follower"]["username"], "ana");
        assert_eq!(json["data"]["followed"]["number_of_followers"], 1);
    }

    #[actix_web::test]
    async fn unknown_following_is_not_found() {
        let state = TestAppStateBuilder::default().with_get_following(MockGet).build();
        let app =
            test::init_service(App::new().app_data(state).service(get_following_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/accounts/ana/follows/carl")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "FOLLOWING_NOT_FOUND");
    }
}
