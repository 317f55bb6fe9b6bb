use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::account::application::ports::outgoing::{AccountListFilter, AccountSummary};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{Ordering, PageRequest, PageResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListAccountsQuery {
    /// Matches username, first name or last name
    pub search: Option<String>,
    pub is_verified: Option<bool>,
    /// `username` or `created`, `-` prefix for descending
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// List active accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = "accounts",
    params(ListAccountsQuery),
    responses(
        (status = 200, description = "Page of accounts", body = inline(SuccessResponse<PageResult<AccountSummary>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/accounts")]
pub async fn list_accounts_handler(
    query: web::Query<ListAccountsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let defaults = AccountListFilter::default();

    let filter = AccountListFilter {
        search: query.search,
        is_verified: query.is_verified,
        ordering: Ordering::parse_or(query.ordering.as_deref(), defaults.ordering),
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.account.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list accounts");
            ApiResponse::internal_error()
        }
    }
}
