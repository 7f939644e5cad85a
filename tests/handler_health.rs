mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use registry_redirect::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(common::StubBlobChecker::new(true));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["regions"]["status"], "ok");
    assert_eq!(
        json["checks"]["regions"]["message"],
        "35 regions routed to 10 buckets"
    );
    assert_eq!(json["checks"]["blob_cache"]["message"], "0 blobs cached");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::create_test_state(common::StubBlobChecker::new(true));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("regions").is_some());
    assert!(json["checks"].get("blob_cache").is_some());
}
