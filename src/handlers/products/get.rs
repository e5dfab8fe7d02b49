// handlers/products/get.rs - GET /products/:identifier handler
use axum::extract::{Path, State};
use axum::Json;

use crate::api::ErrorBody;
use crate::app::AppState;
use crate::error::ApiError;
use crate::store::Product;
use crate::validation;

/// Fetch a product by id or name.
///
/// An identifier that matches the 24-hex id format is always tried as an id
/// first, even if some product is named with a hex-like string; the name
/// lookup only runs when the id lookup found nothing or the format did not
/// qualify. Name matching is exact and case-sensitive.
#[utoipa::path(
    get,
    path = "/products/{identifier}",
    params(("identifier" = String, Path, description = "Product id (24 hex chars) or exact name")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with that id or name", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "products"
)]
pub async fn product_get(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<Product>, ApiError> {
    validation::validate_identifier_param(&identifier)?;

    let mut product = None;
    if validation::is_object_id(&identifier) {
        tracing::debug!(%identifier, "trying product lookup by id");
        product = state
            .store
            .find_by_id(&identifier)
            .await
            .map_err(|e| ApiError::storage("fetching product", e))?;
    }

    if product.is_none() {
        tracing::debug!(%identifier, "trying product lookup by name");
        product = state
            .store
            .find_by_name(&identifier)
            .await
            .map_err(|e| ApiError::storage("fetching product", e))?;
    }

    match product {
        Some(product) => Ok(Json(product)),
        None => {
            tracing::warn!(%identifier, "product not found");
            Err(ApiError::not_found("product not found"))
        }
    }
}
