use std::str::FromStr;

use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::breed::application::domain::entities::Animal;
use crate::breed::application::ports::outgoing::{BreedListFilter, BreedView};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{Ordering, PageRequest, PageResult};
use crate::shared::validation::FieldErrors;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListBreedsQuery {
    /// `dog`, `cat` or `other`
    pub animal: Option<String>,
    /// `name` or `animal`, `-` prefix for descending
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// List breeds
#[utoipa::path(
    get,
    path = "/api/general/breeds",
    tag = "breeds",
    params(ListBreedsQuery),
    responses(
        (status = 200, description = "Page of breeds", body = inline(SuccessResponse<PageResult<BreedView>>)),
        (status = 400, description = "Unknown animal", body = ErrorResponse),
    )
)]
#[get("/api/general/breeds")]
pub async fn list_breeds_handler(
    query: web::Query<ListBreedsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let animal = match query.animal.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        None => None,
        Some(raw) => match Animal::from_str(raw) {
            Ok(animal) => Some(animal),
            Err(()) => {
                return ApiResponse::validation_error(&FieldErrors::single(
                    "animal",
                    format!("Select a valid choice. {} is not one of the available choices.", raw),
                ));
            }
        },
    };

    let filter = BreedListFilter {
        animal,
        ordering: Ordering::parse_or(
            query.ordering.as_deref(),
            BreedListFilter::default().ordering,
        ),
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.breed.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list breeds");
            ApiResponse::internal_error()
        }
    }
}
