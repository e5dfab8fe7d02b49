// handlers/products/create.rs - POST /products/newproduct handler
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::Value;

use super::CreateProductRequest;
use crate::api::ErrorBody;
use crate::app::AppState;
use crate::error::ApiError;
use crate::store::{NewProduct, Product};
use crate::validation::{self, schemas};

/// Create a new product. The store assigns the id; the handler stamps
/// `registeredAt` with the current instant.
#[utoipa::path(
    post,
    path = "/products/newproduct",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "products"
)]
pub async fn product_create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let accepted = validation::validate(&schemas::CREATE_PRODUCT, &payload)?;
    let request: CreateProductRequest = serde_json::from_value(Value::Object(accepted))
        .map_err(|e| ApiError::bad_request(format!("invalid payload: {}", e)))?;

    let product = state
        .store
        .insert(NewProduct {
            name: request.name,
            description: request.description,
            color: request.color,
            weight: request.weight,
            kind: request.kind,
            price: request.price,
            registered_at: Utc::now(),
        })
        .await
        .map_err(|e| ApiError::storage("creating product", e))?;

    tracing::info!(id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}
