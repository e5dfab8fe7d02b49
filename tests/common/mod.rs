#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use product_api::app::{app, AppState};
use product_api::store::MemoryProductStore;

/// Build the full router wired to a fresh in-memory store, so the suite
/// exercises routing, validation, and handlers without a live MongoDB.
pub fn test_app() -> Router {
    app(AppState::new(Arc::new(MemoryProductStore::new())))
}

/// Fire one request at the router and return (status, parsed JSON body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub fn sample_product(name: &str) -> Value {
    json!({
        "name": name,
        "description": "integration test product",
        "color": "blue",
        "weight": "20g",
        "kind": "gadget",
        "price": 9.99,
    })
}

/// POST a valid product and return the created body.
pub async fn create_product(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/products/newproduct",
        Some(sample_product(name)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body
}

/// GET the full product list.
pub async fn list_products(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/products/products", None).await;
    assert_eq!(status, StatusCode::OK, "list failed: {}", body);
    body.as_array().expect("array body").clone()
}

pub fn is_hex_id(value: &Value) -> bool {
    value
        .as_str()
        .map(|s| s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()))
        .unwrap_or(false)
}
