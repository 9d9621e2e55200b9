//! HTTP routes
//!
//! | Route | Body | Trace |
//! |-------|------|-------|
//! | `POST /api/encrypt` | `{ plaintext, key }` | no |
//! | `POST /api/decrypt` | `{ ciphertext, key }` | no |
//! | `POST /api/encrypt-steps` | `{ plaintext, key }` | yes |
//! | `POST /api/decrypt-steps` | `{ ciphertext, key }` | yes |
//! | `GET /health` | - | - |
//!
//! Validation failures are reported in the body as `{ success: false, error }`
//! with status 200; only malformed JSON is rejected at the HTTP level.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tinyrc4_engine::{
    CipherRequest, CipherRequestHandler, CipherResponse, CipherService, Operation,
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<CipherRequestHandler<CipherService>>,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        let handler = CipherRequestHandler::new(Arc::new(CipherService::new()))
            .with_max_text_length(config.limits.max_text_length);
        Self {
            handler: Arc::new(handler),
        }
    }

    fn dispatch(&self, operation: Operation, text: String, key: String, steps: bool) -> CipherResponse {
        self.handler
            .handle(&CipherRequest::new(operation, text, key, steps))
    }
}

/// Body of the encrypt endpoints
#[derive(Debug, Deserialize)]
pub struct EncryptBody {
    #[serde(default)]
    pub plaintext: String,
    #[serde(default)]
    pub key: String,
}

/// Body of the decrypt endpoints
#[derive(Debug, Deserialize)]
pub struct DecryptBody {
    #[serde(default)]
    pub ciphertext: String,
    #[serde(default)]
    pub key: String,
}

/// Build the HTTP router
pub fn build_router(config: &GatewayConfig) -> Router {
    Router::new()
        .route("/api/encrypt", post(encrypt))
        .route("/api/decrypt", post(decrypt))
        .route("/api/encrypt-steps", post(encrypt_steps))
        .route("/api/decrypt-steps", post(decrypt_steps))
        .route("/health", get(health_check))
        .layer(RequestBodyLimitLayer::new(config.limits.max_request_size))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(config))
}

async fn encrypt(State(state): State<AppState>, Json(body): Json<EncryptBody>) -> Json<CipherResponse> {
    Json(state.dispatch(Operation::Encrypt, body.plaintext, body.key, false))
}

async fn decrypt(State(state): State<AppState>, Json(body): Json<DecryptBody>) -> Json<CipherResponse> {
    Json(state.dispatch(Operation::Decrypt, body.ciphertext, body.key, false))
}

async fn encrypt_steps(
    State(state): State<AppState>,
    Json(body): Json<EncryptBody>,
) -> Json<CipherResponse> {
    Json(state.dispatch(Operation::Encrypt, body.plaintext, body.key, true))
}

async fn decrypt_steps(
    State(state): State<AppState>,
    Json(body): Json<DecryptBody>,
) -> Json<CipherResponse> {
    Json(state.dispatch(Operation::Decrypt, body.ciphertext, body.key, true))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
