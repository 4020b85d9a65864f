mod air_quality_dto;

pub use air_quality_dto::{
    AirQualityQuery, AirQualityReadingDto, ForecastDayDto, HealthRecommendationsDto, PollutantDto,
};
