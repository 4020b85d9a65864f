use crate::features::chat::handlers;
use crate::features::chat::services::ChatService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Chat routes that serve both authenticated and anonymous callers.
/// The optional auth layer is attached in main.
pub fn routes(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::send_message))
        .with_state(service)
}

/// Protected chat routes (require JWT authentication)
pub fn protected_routes(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/api/chat/history", get(handlers::get_history))
        .with_state(service)
}
