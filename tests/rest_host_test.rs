use axum::body::Body;
use axum::http::{Request, StatusCode};
use fieldvault_blob::{BlobStore, InMemoryBlobStore};
use fieldvault_host::{build_registry, create_router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_router() -> (axum::Router, InMemoryBlobStore) {
    let store = InMemoryBlobStore::new();
    let registry = build_registry(Arc::new(store.clone())).unwrap();
    (create_router(Arc::new(registry)), store)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_catalog_endpoint() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/tools")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let catalog = body_json(response).await;
    let names: Vec<&str> = catalog
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "hello",
            "get_snippet",
            "save_snippet",
            "save_simple_sensor_data",
            "save_complex_sensor_data",
        ]
    );
}

#[tokio::test]
async fn test_invoke_save_snippet_over_http() {
    let (router, store) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/tools/save_snippet/invoke")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"arguments": {"snippetname": "greet", "snippet": "hi"}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"], "Snippet 'hi' saved successfully");
    assert_eq!(store.read("snippets/greet.json").await.unwrap(), "hi");
}

#[tokio::test]
async fn test_invoke_validation_reply_is_200() {
    let (router, store) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/tools/save_snippet/invoke")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"arguments": {"snippetname": ""}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Validation failures are ordinary tool output, not HTTP errors
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"], "No snippet name provided");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_invoke_unknown_tool_is_404() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/tools/nope/invoke")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_missing_snippet_is_500() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/tools/get_snippet/invoke")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"arguments": {"snippetname": "missing"}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
