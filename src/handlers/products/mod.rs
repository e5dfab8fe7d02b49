// handlers/products/mod.rs - routes for the product resource
//
// Routes registered under the /products prefix:
//   POST   /newproduct   - create a new product
//   GET    /products     - list all products
//   GET    /:identifier  - fetch a product by id or name
//   PUT    /:id          - update a product by id
//   DELETE /:id          - remove a product by id
//
// The :identifier and :id routes share one path template; PUT and DELETE
// enforce the 24-hex id pattern through the validation layer before any
// handler logic runs.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::app::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/newproduct", post(create::product_create))
        .route("/products", get(list::product_list))
        .route(
            "/:identifier",
            get(get::product_get)
                .put(update::product_update)
                .delete(delete::product_delete),
        )
}

/// Body accepted by POST /products/newproduct. All six business fields are
/// required; `price` arrives pre-coerced from the validation layer.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub color: String,
    pub weight: String,
    pub kind: String,
    pub price: f64,
}

/// Body accepted by PUT /products/:id. Documentation shape only; the update
/// handler works from the validated field map so it can apply the
/// coerce-or-drop policy for `price`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub weight: Option<String>,
    pub kind: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<serde_json::Value>,
}
