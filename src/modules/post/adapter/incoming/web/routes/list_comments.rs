use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::ListCommentsError;
use crate::post::application::ports::outgoing::CommentView;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageResult};
use crate::AppState;

use super::get_post::POST_NOT_FOUND;

/// Comments of a post, newest first
#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    tag = "comments",
    params(("id" = Uuid, Path, description = "Post id"), PageQuery),
    responses(
        (status = 200, description = "Page of comments", body = inline(SuccessResponse<PageResult<CommentView>>)),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[get("/api/posts/{id}/comments")]
pub async fn list_comments_handler(
    path: web::Path<Uuid>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .post
        .list_comments
        .execute(post_id, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListCommentsError::PostNotFound) => {
            ApiResponse::not_found(POST_NOT_FOUND, "Post not found")
        }
        Err(ListCommentsError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to list comments");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::post::application::ports::incoming::use_cases::ListCommentsUseCase;
    use crate::shared::pagination::PageRequest;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockList;

    #[async_trait]
    impl ListCommentsUseCase for MockList {
        async fn execute(
            &self,
            _post_id: Uuid,
            _page: PageRequest,
        ) -> Result<PageResult<CommentView>, ListCommentsError> {
            Err(ListCommentsError::PostNotFound)
        }
    }

    #[actix_web::test]
    async fn missing_post_is_404() {
        let state = TestAppStateBuilder::default()
            .with_list_comments(MockList)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_comments_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/posts/{}/comments?page=2", Uuid::new_v4()))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
