use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::appointments::dtos::{AppointmentDto, ScheduleAppointmentDto};
use crate::features::appointments::services::AppointmentService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta};

/// Schedule an appointment with a specialist
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "appointments",
    request_body = ScheduleAppointmentDto,
    responses(
        (status = 201, description = "Appointment request created", body = ApiResponse<AppointmentDto>),
        (status = 401, description = "Authentication required"),
        (status = 400, description = "Validation failed")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn schedule_appointment(
    user: AuthenticatedUser,
    State(service): State<Arc<AppointmentService>>,
    AppJson(payload): AppJson<ScheduleAppointmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentDto>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let appointment = service
        .schedule(
            user.user_id,
            &payload.patient_name,
            &payload.email,
            &payload.phone,
            payload.preferred_date,
            payload.symptoms.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(AppointmentDto::from(appointment)),
            Some(
                "Appointment request received! Our team will contact you within 24 hours to confirm your slot."
                    .to_string(),
            ),
            None,
        )),
    ))
}

/// List the caller's appointment requests
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "appointments",
    responses(
        (status = 200, description = "Appointments retrieved", body = ApiResponse<Vec<AppointmentDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_appointments(
    user: AuthenticatedUser,
    State(service): State<Arc<AppointmentService>>,
) -> Result<Json<ApiResponse<Vec<AppointmentDto>>>> {
    let appointments = service.list(user.user_id).await?;
    let total = appointments.len() as i64;
    let dtos = appointments.into_iter().map(AppointmentDto::from).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}
