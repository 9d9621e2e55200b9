//! Router tests driven through `tower::ServiceExt::oneshot`; no socket is bound.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use tinyrc4_gateway::{build_router, GatewayConfig};

// =============================================================================
// Helpers
// =============================================================================

fn router() -> Router {
    build_router(&GatewayConfig::default())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let payload = body.to_string();
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// =============================================================================
// Cipher routes
// =============================================================================

#[tokio::test]
async fn test_encrypt_reference_scenario() {
    let (status, body) = post_json(
        router(),
        "/api/encrypt",
        json!({ "plaintext": "BAG", "key": "2,1,3" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["plaintext"], "BAG");
    assert_eq!(body["plaintext_binary"], "001000110");
    assert_eq!(body["ciphertext"], "EBA");
    assert_eq!(body["ciphertext_binary"], "100001000");
    assert_eq!(body["key"], json!([2, 1, 3]));
    assert_eq!(body["stream"], json!([5, 1, 6]));
    assert!(body.get("steps").is_none());
}

#[tokio::test]
async fn test_decrypt_reference_scenario() {
    let (status, body) = post_json(
        router(),
        "/api/decrypt",
        json!({ "ciphertext": "EBA", "key": "2, 1, 3" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["ciphertext"], "EBA");
    assert_eq!(body["plaintext"], "BAG");
    assert_eq!(body["stream"], json!([5, 1, 6]));
}

#[tokio::test]
async fn test_encrypt_steps_includes_trace() {
    let (status, body) = post_json(
        router(),
        "/api/encrypt-steps",
        json!({ "plaintext": "BAG", "key": "2,1,3" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 25);
    assert_eq!(steps[0]["phase"], "INIT_S");
    assert_eq!(steps[0]["S"], json!([0, 1, 2, 3, 4, 5, 6, 7]));
    assert_eq!(steps[24]["phase"], "ROUND_COMPUTE_K");
    assert_eq!(steps[24]["k"], 6);
}

#[tokio::test]
async fn test_decrypt_steps_includes_trace() {
    let (status, body) = post_json(
        router(),
        "/api/decrypt-steps",
        json!({ "ciphertext": "eba", "key": "2,1,3" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plaintext"], "BAG");
    assert_eq!(body["steps"].as_array().unwrap().len(), 25);
}

// =============================================================================
// Validation failures (reported in the body, status 200)
// =============================================================================

#[tokio::test]
async fn test_missing_fields_are_reported() {
    let (status, body) = post_json(router(), "/api/encrypt", json!({ "key": "1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Plaintext and key are required");

    let (_, body) = post_json(router(), "/api/decrypt-steps", json!({ "ciphertext": "A" })).await;
    assert_eq!(body["error"], "Ciphertext and key are required");
}

#[tokio::test]
async fn test_invalid_character_is_reported() {
    let (_, body) = post_json(
        router(),
        "/api/encrypt",
        json!({ "plaintext": "ABZ", "key": "1" }),
    )
    .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid character 'Z'. Only A-H allowed.");
}

#[tokio::test]
async fn test_invalid_key_is_reported() {
    let (_, body) = post_json(
        router(),
        "/api/encrypt",
        json!({ "plaintext": "A", "key": "1,8" }),
    )
    .await;
    assert_eq!(body["error"], "Key values must be 0-7, got 8");

    let (_, body) = post_json(
        router(),
        "/api/encrypt",
        json!({ "plaintext": "A", "key": "1,x" }),
    )
    .await;
    assert_eq!(body["error"], "Key must contain only integers separated by commas");
}

#[tokio::test]
async fn test_text_length_limit_is_configurable() {
    let mut config = GatewayConfig::default();
    config.limits.max_text_length = 4;

    let (status, body) = post_json(
        build_router(&config),
        "/api/encrypt",
        json!({ "plaintext": "ABCDE", "key": "1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Text exceeds maximum length of 4 symbols");
}

// =============================================================================
// Transport-level rejections
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/encrypt")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = GatewayConfig::default();
    config.limits.max_request_size = 32;

    let (status, _) = post_json(
        build_router(&config),
        "/api/encrypt",
        json!({ "plaintext": "ABCDEFGH".repeat(8), "key": "1,2,3" }),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/api/unknown")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}
