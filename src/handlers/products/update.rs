// handlers/products/update.rs - PUT /products/:id handler
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{Map, Value};

use super::UpdateProductRequest;
use crate::api::ErrorBody;
use crate::app::AppState;
use crate::error::ApiError;
use crate::store::{Product, ProductPatch};
use crate::validation::{self, schemas};

/// Build the field-set for a partial update from an accepted payload.
///
/// Null fields count as absent and are skipped. A `price` that does not
/// parse as a number is dropped with a warning instead of failing the
/// request; any remaining fields still apply.
fn build_patch(accepted: &Map<String, Value>) -> ProductPatch {
    let mut patch = ProductPatch::default();
    for (key, value) in accepted {
        if value.is_null() {
            continue;
        }
        match key.as_str() {
            "name" => patch.name = value.as_str().map(str::to_owned),
            "description" => patch.description = value.as_str().map(str::to_owned),
            "color" => patch.color = value.as_str().map(str::to_owned),
            "weight" => patch.weight = value.as_str().map(str::to_owned),
            "kind" => patch.kind = value.as_str().map(str::to_owned),
            "price" => match validation::coerce_number(value) {
                Some(price) => patch.price = Some(price),
                None => {
                    tracing::warn!(value = %value, "dropping unparseable price from update")
                }
            },
            // unknown fields were already rejected by the schema
            _ => {}
        }
    }
    patch
}

/// Update a product by id with a partial field-set.
///
/// The update-then-re-read sequence is not transactional: a concurrent
/// delete between the two steps legitimately yields a 404.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product id, 24 hex characters")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Invalid id, invalid payload, or no usable fields", body = ErrorBody),
        (status = 404, description = "No product with that id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "products"
)]
pub async fn product_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Product>, ApiError> {
    validation::validate_id_param(&id)?;
    let accepted = validation::validate(&schemas::UPDATE_PRODUCT, &payload)?;

    let patch = build_patch(&accepted);
    if patch.is_empty() {
        return Err(ApiError::bad_request("no valid fields provided for update"));
    }

    let matched = state
        .store
        .apply_patch(&id, &patch)
        .await
        .map_err(|e| ApiError::storage("updating product", e))?;
    if !matched {
        return Err(ApiError::not_found("product not found for update"));
    }

    // Matched-but-unmodified is still a success; return the current state
    // either way.
    let product = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::storage("updating product", e))?;

    match product {
        Some(product) => {
            tracing::info!(%id, "product updated");
            Ok(Json(product))
        }
        None => Err(ApiError::not_found("product not found after update")),
    }
}
