use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Doctor profile; extends a user row 1:1 with practice metadata and has
/// its own lifecycle (deletable without touching the user)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub doctor_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub contact_phone: Option<String>,
    pub available_days: Option<String>,
    pub consultation_fee: Option<Decimal>,
    pub biography: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a doctor profile
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctor {
    pub user_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 100))]
    pub specialization: String,
    #[validate(custom = "crate::validation::validate_contact_phone")]
    pub contact_phone: Option<String>,
    #[validate(length(max = 255))]
    pub available_days: Option<String>,
    pub consultation_fee: Option<Decimal>,
    pub biography: Option<String>,
}

/// Request DTO for partially updating a doctor profile
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctor {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub specialization: Option<String>,
    #[validate(custom = "crate::validation::validate_contact_phone")]
    pub contact_phone: Option<String>,
    #[validate(length(max = 255))]
    pub available_days: Option<String>,
    pub consultation_fee: Option<Decimal>,
    pub biography: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_doctor_requires_specialization() {
        let payload: CreateDoctor = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "firstName": "Gregory",
            "lastName": "House",
            "specialization": ""
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn consultation_fee_deserializes_as_decimal() {
        let payload: CreateDoctor = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "firstName": "Gregory",
            "lastName": "House",
            "specialization": "Diagnostics",
            "consultationFee": "2500.00"
        }))
        .unwrap();
        assert_eq!(
            payload.consultation_fee,
            Some("2500.00".parse::<Decimal>().unwrap())
        );
    }
}
