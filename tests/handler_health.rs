mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;

use shorturl_service::api::handlers::health::health_handler;

fn test_app(state: shorturl_service::AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_health_ok() {
    let (state, _rx, _repo) = common::create_test_state();

    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["click_queue"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_queue_closed() {
    let (state, rx, _repo) = common::create_test_state();

    // Dropping the receiver closes the channel.
    drop(rx);

    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 503);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["click_queue"]["status"], "error");
}
