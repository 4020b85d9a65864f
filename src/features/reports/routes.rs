use crate::features::reports::handlers::{self, ReportState};
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Protected report routes (require JWT authentication)
pub fn protected_routes(state: ReportState) -> Router {
    Router::new()
        .route("/api/reports/upload", post(handlers::upload_reports))
        .route("/api/reports", get(handlers::list_reports))
        .route("/api/reports/{id}", get(handlers::get_report))
        .route("/api/reports/{id}", delete(handlers::delete_report))
        .route(
            "/api/reports/{id}/reanalyze",
            post(handlers::reanalyze_report),
        )
        .with_state(state)
}
