use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for an air quality lookup
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct AirQualityQuery {
    /// City name (case-insensitive)
    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,
}

/// Simulated air quality reading for a city
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AirQualityReadingDto {
    /// City label, including the state where known (e.g. "Delhi, Delhi")
    pub city: String,
    pub aqi: u32,
    /// Indian AQI band label
    pub category: String,
    pub description: String,
    pub pollutants: Vec<PollutantDto>,
    pub last_updated: DateTime<Utc>,
    pub forecast: Vec<ForecastDayDto>,
    pub recommendations: HealthRecommendationsDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PollutantDto {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForecastDayDto {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub aqi: u32,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRecommendationsDto {
    pub general: String,
    pub asthma: String,
}
