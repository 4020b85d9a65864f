use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::appointments::models::{Appointment, AppointmentStatus};
use crate::shared::validation::is_valid_phone;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ScheduleAppointmentDto {
    #[validate(length(min = 1, max = 100, message = "Patient name must be 1-100 characters"))]
    pub patient_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[schema(value_type = String, format = Date)]
    pub preferred_date: NaiveDate,

    #[validate(length(max = 2000, message = "Symptoms must be at most 2000 characters"))]
    pub symptoms: Option<String>,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Invalid phone number".into()))
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AppointmentDto {
    pub id: Uuid,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    #[schema(value_type = String, format = Date)]
    pub preferred_date: NaiveDate,
    pub symptoms: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentDto {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            patient_name: appointment.patient_name,
            email: appointment.email,
            phone: appointment.phone,
            preferred_date: appointment.preferred_date,
            symptoms: appointment.symptoms,
            status: appointment.status,
            created_at: appointment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ScheduleAppointmentDto {
        ScheduleAppointmentDto {
            patient_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            symptoms: Some("Wheezing at night".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut dto = valid_dto();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut dto = valid_dto();
        dto.phone = "12".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut dto = valid_dto();
        dto.patient_name = String::new();
        assert!(dto.validate().is_err());
    }
}
