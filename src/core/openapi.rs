use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::actions::dtos as actions_dtos;
use crate::features::actions::handlers as actions_handlers;
use crate::features::air_quality::{dtos as air_quality_dtos, handlers as air_quality_handlers};
use crate::features::appointments::{
    dtos as appointments_dtos, handlers as appointments_handlers, models as appointments_models,
};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::chat::{dtos as chat_dtos, handlers as chat_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::signup,
        auth_handlers::login,
        auth_handlers::get_me,
        auth_handlers::logout,
        // Chat
        chat_handlers::send_message,
        chat_handlers::get_history,
        // Reports
        reports_handlers::upload_reports,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::reanalyze_report,
        reports_handlers::delete_report,
        // Air quality
        air_quality_handlers::get_air_quality,
        // Appointments
        appointments_handlers::schedule_appointment,
        appointments_handlers::list_appointments,
        // Actions gateway
        actions_handlers::dispatch_action,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::SignupRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthResponseDto,
            auth_dtos::AuthUserDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            ApiResponse<auth_dtos::AuthUserDto>,
            // Chat
            chat_dtos::ChatRequestDto,
            chat_dtos::ChatResponseDto,
            chat_dtos::ChatMessageDto,
            ApiResponse<chat_dtos::ChatResponseDto>,
            ApiResponse<Vec<chat_dtos::ChatMessageDto>>,
            // Reports
            reports_models::ReportStatus,
            reports_models::RiskLevel,
            reports_models::AnalysisResult,
            reports_dtos::ReportDto,
            reports_dtos::UploadReportsDto,
            reports_dtos::FailedUploadDto,
            reports_dtos::UploadResponseDto,
            ApiResponse<reports_dtos::ReportDto>,
            ApiResponse<Vec<reports_dtos::ReportDto>>,
            ApiResponse<reports_dtos::UploadResponseDto>,
            // Air quality
            air_quality_dtos::AirQualityReadingDto,
            air_quality_dtos::PollutantDto,
            air_quality_dtos::ForecastDayDto,
            air_quality_dtos::HealthRecommendationsDto,
            ApiResponse<air_quality_dtos::AirQualityReadingDto>,
            // Appointments
            appointments_models::AppointmentStatus,
            appointments_dtos::ScheduleAppointmentDto,
            appointments_dtos::AppointmentDto,
            ApiResponse<appointments_dtos::AppointmentDto>,
            ApiResponse<Vec<appointments_dtos::AppointmentDto>>,
            // Actions gateway
            actions_dtos::ActionRequestDto,
            actions_dtos::AnalyzeReportDataDto,
            actions_dtos::AirQualityDataDto,
            actions_dtos::ChatbotDataDto,
            actions_dtos::ChatbotResponseDto,
            ApiResponse<serde_json::Value>,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "chat", description = "Asthma assistant chatbot"),
        (name = "reports", description = "Medical report upload and analysis"),
        (name = "air-quality", description = "Simulated city air quality readings"),
        (name = "appointments", description = "Specialist appointment scheduling"),
        (name = "actions", description = "Legacy single-endpoint action gateway"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "AsthmaCare API",
        version = "0.1.0",
        description = "API documentation for AsthmaCare",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
