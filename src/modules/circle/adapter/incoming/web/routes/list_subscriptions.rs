use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::circle::application::ports::incoming::use_cases::ListSubscriptionsError;
use crate::circle::application::ports::outgoing::MemberView;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListSubscriptionsQuery {
    /// Only admins (`true`) or only regular members (`false`)
    pub is_admin: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Members of a circle
#[utoipa::path(
    get,
    path = "/api/circles/{slug_name}/subscriptions",
    tag = "circles",
    params(("slug_name" = String, Path, description = "Circle slug name"), ListSubscriptionsQuery),
    responses(
        (status = 200, description = "Page of members", body = inline(SuccessResponse<PageResult<MemberView>>)),
        (status = 404, description = "Circle not found", body = ErrorResponse),
    )
)]
#[get("/api/circles/{slug_name}/subscriptions")]
pub async fn list_subscriptions_handler(
    path: web::Path<String>,
    query: web::Query<ListSubscriptionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug_name = path.into_inner();
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page);

    match data
        .circle
        .list_subscriptions
        .execute(&slug_name, query.is_admin, page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(ListSubscriptionsError::CircleNotFound) => {
            ApiResponse::not_found("CIRCLE_NOT_FOUND", "Circle not found")
        }
        Err(ListSubscriptionsError::RepositoryError(e)) => {
            error!(slug_name = %slug_name, error = %e, "Failed to list subscriptions");
            ApiResponse::internal_error()
        }
    }
}
