use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::outgoing::{CircleListFilter, CircleSummary};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{Ordering, PageRequest, PageResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListCirclesQuery {
    /// Matches slug name or name
    pub search: Option<String>,
    pub is_verified: Option<bool>,
    /// `created`, `-` prefix for descending
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// List active circles
#[utoipa::path(
    get,
    path = "/api/circles",
    tag = "circles",
    params(ListCirclesQuery),
    responses(
        (status = 200, description = "Page of circles", body = inline(SuccessResponse<PageResult<CircleSummary>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/circles")]
pub async fn list_circles_handler(
    query: web::Query<ListCirclesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let defaults = CircleListFilter::default();

    let filter = CircleListFilter {
        search: query.search,
        is_verified: query.is_verified,
        ordering: Ordering::parse_or(query.ordering.as_deref(), defaults.ordering),
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.circle.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list circles");
            ApiResponse::internal_error()
        }
    }
}
