mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn root_reports_api_info() {
    let app = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "product-api");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn ping_pongs() {
    let app = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pong"], "pong");
}

#[tokio::test]
async fn health_reports_storage_ok() {
    let app = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/products/newproduct"].is_object());
    assert!(body["paths"]["/products/{identifier}"].is_object());
}

#[tokio::test]
async fn responses_carry_security_headers() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::test_app();
    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}
