use crate::features::appointments::handlers;
use crate::features::appointments::services::AppointmentService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Protected appointment routes (require JWT authentication)
pub fn protected_routes(service: Arc<AppointmentService>) -> Router {
    Router::new()
        .route("/api/appointments", post(handlers::schedule_appointment))
        .route("/api/appointments", get(handlers::list_appointments))
        .with_state(service)
}
