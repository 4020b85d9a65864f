use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::appointments::models::{Appointment, AppointmentStatus};

const APPOINTMENT_COLUMNS: &str =
    "id, user_id, patient_name, email, phone, preferred_date, symptoms, status, created_at";

pub struct AppointmentService {
    pool: PgPool,
}

impl AppointmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Schedule a new appointment request. New requests always start out
    /// pending; confirmation happens out of band.
    pub async fn schedule(
        &self,
        user_id: Uuid,
        patient_name: &str,
        email: &str,
        phone: &str,
        preferred_date: chrono::NaiveDate,
        symptoms: Option<&str>,
    ) -> Result<Appointment> {
        if preferred_date < Utc::now().date_naive() {
            return Err(AppError::Validation(
                "Preferred date must be today or later".to_string(),
            ));
        }

        let appointment = sqlx::query_as::<_, Appointment>(&format!(
            "INSERT INTO appointments (user_id, patient_name, email, phone, preferred_date, symptoms, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(user_id)
        .bind(patient_name)
        .bind(email.to_lowercase())
        .bind(phone)
        .bind(preferred_date)
        .bind(symptoms)
        .bind(AppointmentStatus::Pending)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Appointment {} scheduled for {} on {}",
            appointment.id, appointment.patient_name, appointment.preferred_date
        );

        Ok(appointment)
    }

    /// List the caller's appointments, earliest preferred date first
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Appointment>> {
        let appointments = sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments
             WHERE user_id = $1
             ORDER BY preferred_date ASC, created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }
}
