use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// All API routes. Static files are attached in `main` as the fallback.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/chat", post(handlers::chat::send_message))
}
