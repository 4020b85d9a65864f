use crate::features::air_quality::handlers;
use crate::features::air_quality::service::AirQualityService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Public air quality routes
pub fn routes(service: Arc<AirQualityService>) -> Router {
    Router::new()
        .route("/api/air-quality", get(handlers::get_air_quality))
        .with_state(service)
}
