// handlers/products/list.rs - GET /products/products handler
use axum::extract::State;
use axum::Json;

use crate::api::ErrorBody;
use crate::app::AppState;
use crate::error::ApiError;
use crate::store::Product;

/// List every product, unfiltered and unpaginated, in storage-native order.
#[utoipa::path(
    get,
    path = "/products/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "products"
)]
pub async fn product_list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::storage("listing products", e))?;

    Ok(Json(products))
}
