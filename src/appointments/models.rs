use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Appointment lifecycle status, stored as the `appointment_status`
/// Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Appointment row linking a patient to a doctor for a date and time slot
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub appointment_id: i32,
    pub user_id: i32,
    pub doctor_id: i32,
    pub appointment_date: NaiveDate,
    #[schema(value_type = String, example = "10:30:00")]
    pub time_slot: NaiveTime,
    pub total_amount: Option<Decimal>,
    pub appointment_status: AppointmentStatus,
    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for booking an appointment
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointment {
    pub user_id: i32,
    pub doctor_id: i32,
    pub appointment_date: NaiveDate,
    #[schema(value_type = String, example = "10:30:00")]
    pub time_slot: NaiveTime,
    pub total_amount: Option<Decimal>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Request DTO for partially updating an appointment
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointment {
    pub appointment_date: Option<NaiveDate>,
    #[schema(value_type = String, example = "10:30:00")]
    pub time_slot: Option<NaiveTime>,
    pub total_amount: Option<Decimal>,
    pub appointment_status: Option<AppointmentStatus>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    #[validate(length(max = 2000))]
    pub cancellation_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_database_labels() {
        assert_eq!(
            serde_json::to_value(AppointmentStatus::Pending).unwrap(),
            "Pending"
        );
        assert_eq!(
            serde_json::to_value(AppointmentStatus::Cancelled).unwrap(),
            "Cancelled"
        );
    }

    #[test]
    fn create_appointment_parses_date_and_time() {
        let payload: CreateAppointment = serde_json::from_value(serde_json::json!({
            "userId": 3,
            "doctorId": 1,
            "appointmentDate": "2026-09-01",
            "timeSlot": "10:30:00"
        }))
        .unwrap();
        assert_eq!(
            payload.appointment_date,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
        assert_eq!(
            payload.time_slot,
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
    }
}
