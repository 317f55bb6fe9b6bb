use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::domain::entities::{PostState, PostTag};
use crate::post::application::ports::outgoing::{PostCard, PostListFilter};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::validation::{choice, FieldErrors};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListPostsQuery {
    /// `lost`, `found` or `adoption`
    pub tag: Option<String>,
    /// `open`, `finished` or `cancelled`
    pub state: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListPostsQuery {
    fn filter(&self) -> Result<PostListFilter, FieldErrors> {
        let mut errors = FieldErrors::new();
        let tag = self
            .tag
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| choice::<PostTag>(&mut errors, "tag", raw));
        let state = self
            .state
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| choice::<PostState>(&mut errors, "state", raw));
        errors.into_result()?;

        Ok(PostListFilter {
            tag,
            state,
            ..Default::default()
        })
    }
}

/// List posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Page of posts", body = inline(SuccessResponse<PageResult<PostCard>>)),
        (status = 400, description = "Unknown tag or state", body = ErrorResponse),
    )
)]
#[get("/api/posts")]
pub async fn list_posts_handler(
    query: web::Query<ListPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = match query.filter() {
        Ok(filter) => filter,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.post.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list posts");
            ApiResponse::internal_error()
        }
    }
}
