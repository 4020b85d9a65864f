//! Simulated air quality readings for Indian cities.
//!
//! A static baseline table seeds a per-request perturbation; pollutant
//! concentrations are derived linearly from the perturbed AQI. Classification
//! uses the six-band Indian AQI scale.

use chrono::{Duration as ChronoDuration, Utc};
use rand::Rng;
use std::time::Duration;

use crate::features::air_quality::dtos::{
    AirQualityReadingDto, ForecastDayDto, HealthRecommendationsDto, PollutantDto,
};

/// Baseline AQI estimates for major Indian cities
struct CityBaseline {
    key: &'static str,
    name: &'static str,
    state: &'static str,
    base_aqi: u32,
}

const CITY_BASELINES: &[CityBaseline] = &[
    CityBaseline { key: "delhi", name: "Delhi", state: "Delhi", base_aqi: 180 },
    CityBaseline { key: "mumbai", name: "Mumbai", state: "Maharashtra", base_aqi: 120 },
    CityBaseline { key: "bangalore", name: "Bangalore", state: "Karnataka", base_aqi: 110 },
    CityBaseline { key: "hyderabad", name: "Hyderabad", state: "Telangana", base_aqi: 130 },
    CityBaseline { key: "chennai", name: "Chennai", state: "Tamil Nadu", base_aqi: 90 },
    CityBaseline { key: "kolkata", name: "Kolkata", state: "West Bengal", base_aqi: 140 },
    CityBaseline { key: "pune", name: "Pune", state: "Maharashtra", base_aqi: 125 },
    CityBaseline { key: "ahmedabad", name: "Ahmedabad", state: "Gujarat", base_aqi: 150 },
    CityBaseline { key: "jaipur", name: "Jaipur", state: "Rajasthan", base_aqi: 170 },
    CityBaseline { key: "lucknow", name: "Lucknow", state: "Uttar Pradesh", base_aqi: 185 },
    CityBaseline { key: "kanpur", name: "Kanpur", state: "Uttar Pradesh", base_aqi: 200 },
    CityBaseline { key: "nagpur", name: "Nagpur", state: "Maharashtra", base_aqi: 135 },
    CityBaseline { key: "indore", name: "Indore", state: "Madhya Pradesh", base_aqi: 140 },
    CityBaseline { key: "patna", name: "Patna", state: "Bihar", base_aqi: 220 },
    CityBaseline { key: "gurgaon", name: "Gurugram", state: "Haryana", base_aqi: 175 },
    CityBaseline { key: "noida", name: "Noida", state: "Uttar Pradesh", base_aqi: 170 },
    CityBaseline { key: "faridabad", name: "Faridabad", state: "Haryana", base_aqi: 168 },
    CityBaseline { key: "surat", name: "Surat", state: "Gujarat", base_aqi: 115 },
    CityBaseline { key: "rajkot", name: "Rajkot", state: "Gujarat", base_aqi: 130 },
    CityBaseline { key: "vadodara", name: "Vadodara", state: "Gujarat", base_aqi: 125 },
];

/// Baseline used for cities not in the table
const DEFAULT_BASE_AQI: u32 = 125;

/// One band of the Indian AQI scale
pub struct AqiBand {
    pub min: u32,
    /// Inclusive upper bound; `u32::MAX` for the open-ended top band
    pub max: u32,
    pub label: &'static str,
    pub description: &'static str,
    pub health_advice: &'static str,
    pub asthma_advice: &'static str,
}

/// The six Indian AQI bands. Contiguous and non-overlapping, together
/// covering every non-negative AQI value.
pub const AQI_BANDS: &[AqiBand] = &[
    AqiBand {
        min: 0,
        max: 50,
        label: "Good",
        description: "Air quality is satisfactory, and air pollution poses little or no risk.",
        health_advice: "Enjoy your usual outdoor activities.",
        asthma_advice: "Safe for people with asthma. Good time for outdoor exercise.",
    },
    AqiBand {
        min: 51,
        max: 100,
        label: "Satisfactory",
        description: "Air quality is acceptable. However, there may be a risk for some people, particularly those who are unusually sensitive to air pollution.",
        health_advice: "Unusually sensitive people should consider limiting prolonged outdoor exertion.",
        asthma_advice: "Generally safe for most people with asthma. Sensitive individuals should monitor symptoms.",
    },
    AqiBand {
        min: 101,
        max: 200,
        label: "Moderate",
        description: "Members of sensitive groups may experience health effects. The general public is less likely to be affected.",
        health_advice: "People with respiratory disease should limit outdoor exertion.",
        asthma_advice: "People with asthma should reduce prolonged outdoor activities and keep rescue inhaler handy.",
    },
    AqiBand {
        min: 201,
        max: 300,
        label: "Poor",
        description: "Some members of the general public may experience health effects; members of sensitive groups may experience more serious health effects.",
        health_advice: "People with heart or lung disease, older adults, and children should avoid prolonged or heavy outdoor exertion.",
        asthma_advice: "People with asthma should avoid outdoor activities. Stay indoors and use air purifier if available.",
    },
    AqiBand {
        min: 301,
        max: 400,
        label: "Very Poor",
        description: "Health alert: The risk of health effects is increased for everyone.",
        health_advice: "People with heart or lung disease, older adults, and children should avoid all outdoor exertion.",
        asthma_advice: "Emergency level for asthmatics. Stay indoors, use air purifier, and have emergency medication ready.",
    },
    AqiBand {
        min: 401,
        max: u32::MAX,
        label: "Severe",
        description: "Health warning of emergency conditions: everyone is more likely to be affected.",
        health_advice: "Everyone should avoid all outdoor exertion.",
        asthma_advice: "Hazardous for asthmatics. Stay indoors, seal windows, use N95 masks if going out is unavoidable.",
    },
];

/// Classify an AQI value into its band
pub fn classify(aqi: u32) -> &'static AqiBand {
    // The last band is open-ended, so this always finds a match
    AQI_BANDS
        .iter()
        .find(|band| aqi >= band.min && aqi <= band.max)
        .unwrap_or(&AQI_BANDS[AQI_BANDS.len() - 1])
}

fn lookup_city(city: &str) -> (String, u32) {
    let key = city.trim().to_lowercase();

    match CITY_BASELINES.iter().find(|c| c.key == key) {
        Some(c) => (format!("{}, {}", c.name, c.state), c.base_aqi),
        None => (city.trim().to_string(), DEFAULT_BASE_AQI),
    }
}

/// Service producing simulated per-city readings
pub struct AirQualityService {
    delay: Duration,
}

impl AirQualityService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Simulated current reading for a city, with pollutant breakdown,
    /// three-day forecast, and band-specific advice
    pub async fn get_reading(&self, city: &str) -> AirQualityReadingDto {
        tokio::time::sleep(self.delay).await;

        let (label, base_aqi) = lookup_city(city);
        let reading = simulate_reading(&label, base_aqi);

        tracing::debug!("Simulated air quality for {}: AQI {}", label, reading.aqi);

        reading
    }
}

fn simulate_reading(city_label: &str, base_aqi: u32) -> AirQualityReadingDto {
    let mut rng = rand::thread_rng();

    // ±20 perturbation around the baseline, floored at 1
    let variation = rng.gen_range(-20.0..=20.0);
    let aqi = ((base_aqi as f64 + variation).round().max(1.0)) as u32;
    let aqi_f = aqi as f64;

    // Pollutants derive linearly from the AQI with independent jitter
    let pm25 = (aqi_f * 0.6 + rng.gen_range(-10.0..=10.0)).round().max(0.0);
    let pm10 = (pm25 * 1.8 + rng.gen_range(-15.0..=15.0)).round().max(0.0);
    let no2 = (aqi_f * 0.3 + rng.gen_range(-7.5..=7.5)).round().max(0.0);
    let so2 = (aqi_f * 0.1 + rng.gen_range(0.0..=10.0)).round().max(0.0);
    let co = (((aqi_f * 0.01 + rng.gen_range(0.0..=0.5)) * 10.0).round() / 10.0).max(0.0);
    let o3 = (aqi_f * 0.4 + rng.gen_range(-10.0..=10.0)).round().max(0.0);

    let band = classify(aqi);

    let forecast = (1..=3)
        .map(|i| {
            let variation = rng.gen_range(-30.0..=30.0);
            let forecast_aqi = ((aqi_f + variation).round().max(0.0)) as u32;
            ForecastDayDto {
                date: (Utc::now() + ChronoDuration::days(i))
                    .format("%Y-%m-%d")
                    .to_string(),
                aqi: forecast_aqi,
                category: classify(forecast_aqi).label.to_string(),
            }
        })
        .collect();

    AirQualityReadingDto {
        city: city_label.to_string(),
        aqi,
        category: band.label.to_string(),
        description: band.description.to_string(),
        pollutants: vec![
            PollutantDto { name: "PM2.5".to_string(), value: pm25, unit: "μg/m³".to_string() },
            PollutantDto { name: "PM10".to_string(), value: pm10, unit: "μg/m³".to_string() },
            PollutantDto { name: "NO₂".to_string(), value: no2, unit: "μg/m³".to_string() },
            PollutantDto { name: "SO₂".to_string(), value: so2, unit: "μg/m³".to_string() },
            PollutantDto { name: "CO".to_string(), value: co, unit: "mg/m³".to_string() },
            PollutantDto { name: "O₃".to_string(), value: o3, unit: "μg/m³".to_string() },
        ],
        last_updated: Utc::now(),
        forecast,
        recommendations: HealthRecommendationsDto {
            general: band.health_advice.to_string(),
            asthma: band.asthma_advice.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_cover_all_values_without_overlap() {
        // Every AQI value in a wide range lands in exactly one band
        for aqi in 0u32..=600 {
            let matches = AQI_BANDS
                .iter()
                .filter(|b| aqi >= b.min && aqi <= b.max)
                .count();
            assert_eq!(matches, 1, "AQI {} matched {} bands", aqi, matches);
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(0).label, "Good");
        assert_eq!(classify(50).label, "Good");
        assert_eq!(classify(51).label, "Satisfactory");
        assert_eq!(classify(100).label, "Satisfactory");
        assert_eq!(classify(101).label, "Moderate");
        assert_eq!(classify(200).label, "Moderate");
        assert_eq!(classify(201).label, "Poor");
        assert_eq!(classify(300).label, "Poor");
        assert_eq!(classify(301).label, "Very Poor");
        assert_eq!(classify(400).label, "Very Poor");
        assert_eq!(classify(401).label, "Severe");
        assert_eq!(classify(1000).label, "Severe");
    }

    #[test]
    fn test_unknown_city_uses_default_baseline() {
        let (label, base) = lookup_city("Atlantis");
        assert_eq!(base, DEFAULT_BASE_AQI);
        assert_eq!(label, "Atlantis");
    }

    #[test]
    fn test_known_city_label_includes_state() {
        let (label, base) = lookup_city("  DELHI ");
        assert_eq!(base, 180);
        assert_eq!(label, "Delhi, Delhi");
    }

    #[test]
    fn test_delhi_never_reads_good() {
        // Delhi's baseline is 180 with ±20 variance, so it can never drop
        // into Good or Satisfactory
        for _ in 0..200 {
            let reading = simulate_reading("Delhi, Delhi", 180);
            assert!(reading.aqi >= 160);
            assert_ne!(reading.category, "Good");
            assert_ne!(reading.category, "Satisfactory");
        }
    }

    #[test]
    fn test_pollutants_are_non_negative() {
        for _ in 0..100 {
            let reading = simulate_reading("Chennai, Tamil Nadu", 90);
            for pollutant in &reading.pollutants {
                assert!(pollutant.value >= 0.0, "{} was negative", pollutant.name);
            }
        }
    }

    #[test]
    fn test_forecast_has_three_days() {
        let reading = simulate_reading("Delhi, Delhi", 180);
        assert_eq!(reading.forecast.len(), 3);
        for day in &reading.forecast {
            assert_eq!(day.category, classify(day.aqi).label);
        }
    }
}
