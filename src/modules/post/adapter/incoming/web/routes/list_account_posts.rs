use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::ListAccountPostsError;
use crate::post::application::ports::outgoing::PostCard;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageResult};
use crate::AppState;

/// Posts published by an account, newest first
#[utoipa::path(
    get,
    path = "/api/accounts/{username}/posts",
    tag = "posts",
    params(("username" = String, Path, description = "Account username"), PageQuery),
    responses(
        (status = 200, description = "Page of posts", body = inline(SuccessResponse<PageResult<PostCard>>)),
        (status = 404, description = "Account not found", body = ErrorResponse),
    )
)]
#[get("/api/accounts/{username}/posts")]
pub async fn list_account_posts_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data
        .post
        .list_by_account
        .execute(&username, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListAccountPostsError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(ListAccountPostsError::RepositoryError(e)) => {
            error!(username = %username, error = %e, "Failed to list account posts");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::account::application::domain::entities::UserId;
    use crate::post::application::domain::policies::test_fixtures::post;
    use crate::post::application::ports::incoming::use_cases::ListAccountPostsUseCase;
    use crate::shared::pagination::PageRequest;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::read_json;

    struct MockList;

    #[async_trait]
    impl ListAccountPostsUseCase for MockList {
        async fn execute(
            &self,
            username: &str,
            page: PageRequest,
        ) -> Result<PageResult<PostCard>, ListAccountPostsError> {
            if username != "ana" {
                return Err(ListAccountPostsError::AccountNotFound);
            }
            let card =
                PostCard::from_post(&post(UserId::from(Uuid::new_v4())), username.to_string(), None);
            Ok(PageResult::new(vec![card], page, 1))
        }
    }

    #[actix_web::test]
    async fn lists_posts_of_known_account() {
        let state = TestAppStateBuilder::default()
            .with_list_account_posts(MockList)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_account_posts_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/accounts/ana/posts").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["items"][0]["user"], "ana");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/accounts/ghost/posts").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
