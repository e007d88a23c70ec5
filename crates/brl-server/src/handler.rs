use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use brl_protocol::{Invocation, OperationResponse};
use serde_json::json;

use crate::dispatch::Dispatcher;

/// Mutating entry point: `POST /v1/invoke`.
pub async fn invoke_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(invocation): Json<Invocation>,
) -> (StatusCode, Json<OperationResponse>) {
    match dispatcher.invoke(&invocation) {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(OperationResponse::error(e.to_string())),
        ),
    }
}

/// Read-only entry point: `POST /v1/query`.
pub async fn query_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(invocation): Json<Invocation>,
) -> (StatusCode, Json<OperationResponse>) {
    match dispatcher.query(&invocation) {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(OperationResponse::error(e.to_string())),
        ),
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "brl-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
