use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Prescription row; references the appointment it was issued in, the
/// prescribing doctor, and the patient
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub prescription_id: i32,
    pub appointment_id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
    pub medications: String,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for issuing a prescription
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescription {
    pub appointment_id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
    #[validate(length(min = 1, message = "Medications are required"))]
    pub medications: String,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
    pub notes: Option<String>,
}

/// Request DTO for partially updating a prescription
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrescription {
    #[validate(length(min = 1))]
    pub medications: Option<String>,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
    pub notes: Option<String>,
}
