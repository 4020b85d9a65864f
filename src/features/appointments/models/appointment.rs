use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Appointment request as stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: NaiveDate,
    pub symptoms: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}
