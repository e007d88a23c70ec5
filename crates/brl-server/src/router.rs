use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::dispatch::Dispatcher;
use crate::handler;

/// Build the axum router with all BRL endpoints.
pub fn build_router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/v1/invoke", post(handler::invoke_handler))
        .route("/v1/query", post(handler::query_handler))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}
