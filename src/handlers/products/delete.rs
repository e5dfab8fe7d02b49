// handlers/products/delete.rs - DELETE /products/:id handler
use axum::extract::{Path, State};
use axum::Json;

use crate::api::{ErrorBody, MessageBody};
use crate::app::AppState;
use crate::error::ApiError;
use crate::validation;

/// Remove a product by id. Responds 200 with a confirmation message rather
/// than 204 so clients get visible feedback.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product id, 24 hex characters")),
    responses(
        (status = 200, description = "Product deleted", body = MessageBody),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "No product with that id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "products"
)]
pub async fn product_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    validation::validate_id_param(&id)?;

    let deleted = state
        .store
        .remove(&id)
        .await
        .map_err(|e| ApiError::storage("deleting product", e))?;
    if !deleted {
        return Err(ApiError::not_found("product not found for deletion"));
    }

    tracing::info!(%id, "product deleted");
    Ok(Json(MessageBody {
        message: "product deleted successfully".to_string(),
    }))
}
