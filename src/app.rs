//! Router assembly: service routes, the product resource, documentation,
//! and the global middleware chain.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::docs::ApiDoc;
use crate::handlers;
use crate::middleware;
use crate::store::ProductStore;

/// Shared per-request context. The storage session is established once at
/// startup and injected here by the composition root; handlers never reach
/// for globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Service routes
        .route("/", get(root))
        .route("/ping", get(ping))
        .route("/health", get(health))
        // Product resource
        .nest("/products", handlers::products::routes())
        // Swagger UI over the generated OpenAPI document
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Global middleware
        .layer(middleware::content_type_nosniff())
        .layer(middleware::frame_deny())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "product-api",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Product API up and running",
        "docs": "/docs",
    }))
}

async fn ping() -> Json<Value> {
    Json(json!({ "pong": "pong" }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "storage": "ok",
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "error": "storage unavailable",
                })),
            )
        }
    }
}
