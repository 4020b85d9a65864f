use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::appointments::dtos::ScheduleAppointmentDto;

/// Dispatch envelope accepted by the actions gateway.
///
/// Unknown `action` values fail deserialization and surface as 400.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum ActionRequestDto {
    AnalyzeReport(AnalyzeReportDataDto),
    GetAirQuality(AirQualityDataDto),
    ChatbotResponse(ChatbotDataDto),
    ScheduleAppointment(ScheduleAppointmentDto),
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeReportDataDto {
    pub report_text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AirQualityDataDto {
    pub city: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatbotDataDto {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatbotResponseDto {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chatbot_action() {
        let req: ActionRequestDto = serde_json::from_str(
            r#"{"action": "chatbot_response", "data": {"message": "hello"}}"#,
        )
        .unwrap();
        assert!(matches!(
            req,
            ActionRequestDto::ChatbotResponse(ChatbotDataDto { ref message }) if message == "hello"
        ));
    }

    #[test]
    fn test_deserialize_air_quality_action() {
        let req: ActionRequestDto =
            serde_json::from_str(r#"{"action": "get_air_quality", "data": {"city": "Delhi"}}"#)
                .unwrap();
        assert!(matches!(req, ActionRequestDto::GetAirQuality(_)));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result: Result<ActionRequestDto, _> =
            serde_json::from_str(r#"{"action": "drop_tables", "data": {}}"#);
        assert!(result.is_err());
    }
}
