use crate::features::actions::handlers::{self, ActionState};
use axum::{routing::post, Router};

/// Gateway routes. Attached behind the optional-auth layer so anonymous
/// actions keep working while authenticated callers get attribution.
pub fn routes(state: ActionState) -> Router {
    Router::new()
        .route("/api/actions", post(handlers::dispatch_action))
        .with_state(state)
}
