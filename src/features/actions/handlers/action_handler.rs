use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, MaybeUser};
use crate::features::actions::dtos::{ActionRequestDto, ChatbotResponseDto};
use crate::features::air_quality::service::AirQualityService;
use crate::features::appointments::dtos::AppointmentDto;
use crate::features::appointments::services::AppointmentService;
use crate::features::chat::services::ChatService;
use crate::features::reports::services::AnalysisService;
use crate::shared::types::ApiResponse;

/// Handler state for the actions gateway
#[derive(Clone)]
pub struct ActionState {
    pub analysis_service: Arc<AnalysisService>,
    pub air_quality_service: Arc<AirQualityService>,
    pub chat_service: Arc<ChatService>,
    pub appointment_service: Arc<AppointmentService>,
}

/// Single-endpoint dispatch gateway.
///
/// Carried over for clients built against the legacy function API, which
/// multiplexed everything over one POST endpoint. `analyze_report`,
/// `get_air_quality`, and `chatbot_response` work anonymously;
/// `schedule_appointment` requires a bearer token.
#[utoipa::path(
    post,
    path = "/api/actions",
    tag = "actions",
    request_body = ActionRequestDto,
    responses(
        (status = 200, description = "Action executed", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Unknown action or malformed payload"),
        (status = 401, description = "Action requires authentication")
    )
)]
pub async fn dispatch_action(
    MaybeUser(user): MaybeUser,
    State(state): State<ActionState>,
    AppJson(request): AppJson<ActionRequestDto>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let data = match request {
        ActionRequestDto::AnalyzeReport(data) => {
            let analysis = state.analysis_service.analyze(&data.report_text).await;
            serde_json::to_value(analysis).map_err(|e| AppError::Internal(e.to_string()))?
        }
        ActionRequestDto::GetAirQuality(data) => {
            let reading = state.air_quality_service.get_reading(&data.city).await;
            serde_json::to_value(reading).map_err(|e| AppError::Internal(e.to_string()))?
        }
        ActionRequestDto::ChatbotResponse(data) => {
            let response = state
                .chat_service
                .send_message(user.as_ref().map(|u| u.user_id), &data.message)
                .await;
            serde_json::to_value(ChatbotResponseDto { response })
                .map_err(|e| AppError::Internal(e.to_string()))?
        }
        ActionRequestDto::ScheduleAppointment(payload) => {
            let user = user.ok_or_else(|| {
                AppError::Unauthorized("Scheduling an appointment requires authentication".to_string())
            })?;

            payload
                .validate()
                .map_err(|e| AppError::Validation(e.to_string()))?;

            let appointment = state
                .appointment_service
                .schedule(
                    user.user_id,
                    &payload.patient_name,
                    &payload.email,
                    &payload.phone,
                    payload.preferred_date,
                    payload.symptoms.as_deref(),
                )
                .await?;

            serde_json::to_value(AppointmentDto::from(appointment))
                .map_err(|e| AppError::Internal(e.to_string()))?
        }
    };

    Ok(Json(ApiResponse::success(Some(data), None, None)))
}
