use crate::core::error::{AppError, Result};
use crate::features::air_quality::dtos::{AirQualityQuery, AirQualityReadingDto};
use crate::features::air_quality::service::AirQualityService;
use crate::shared::types::ApiResponse;
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// Get a simulated air quality reading for a city
#[utoipa::path(
    get,
    path = "/api/air-quality",
    params(AirQualityQuery),
    responses(
        (status = 200, description = "Air quality reading", body = ApiResponse<AirQualityReadingDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "air-quality"
)]
pub async fn get_air_quality(
    State(service): State<Arc<AirQualityService>>,
    Query(query): Query<AirQualityQuery>,
) -> Result<Json<ApiResponse<AirQualityReadingDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reading = service.get_reading(&query.city).await;
    Ok(Json(ApiResponse::success(Some(reading), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::air_quality::routes;
    use axum_test::TestServer;
    use std::time::Duration;

    fn test_server() -> TestServer {
        let service = Arc::new(AirQualityService::new(Duration::ZERO));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_get_air_quality_for_known_city() {
        let server = test_server();
        let response = server
            .get("/api/air-quality")
            .add_query_param("city", "Delhi")
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["city"], "Delhi, Delhi");
        assert_eq!(body["data"]["forecast"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_air_quality_rejects_empty_city() {
        let server = test_server();
        let response = server
            .get("/api/air-quality")
            .add_query_param("city", "")
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }
}
