use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Complaint lifecycle status, stored as the `complaint_status` Postgres
/// enum; note the "In Progress" label contains a space in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "complaint_status")]
pub enum ComplaintStatus {
    Open,
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

/// Complaint row; optionally tied to an appointment, optionally assigned
/// to an admin
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub complaint_id: i32,
    pub user_id: i32,
    pub related_appointment_id: Option<i32>,
    pub subject: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub admin_response: Option<String>,
    pub priority: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub assigned_to: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for filing a complaint
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaint {
    pub user_id: i32,
    pub related_appointment_id: Option<i32>,
    #[validate(length(min = 1, max = 255, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom = "crate::validation::validate_priority")]
    pub priority: Option<String>,
}

/// Request DTO for partially updating a complaint
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaint {
    #[validate(length(min = 1, max = 255))]
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub status: Option<ComplaintStatus>,
    pub admin_response: Option<String>,
    #[validate(custom = "crate::validation::validate_priority")]
    pub priority: Option<String>,
    pub assigned_to: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_serializes_with_space() {
        assert_eq!(
            serde_json::to_value(ComplaintStatus::InProgress).unwrap(),
            "In Progress"
        );
        let parsed: ComplaintStatus = serde_json::from_value(serde_json::json!("In Progress")).unwrap();
        assert_eq!(parsed, ComplaintStatus::InProgress);
    }

    #[test]
    fn create_complaint_validates_priority() {
        let mut payload: CreateComplaint = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "subject": "Long wait",
            "description": "Waited two hours past my slot",
            "priority": "High"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());

        payload.priority = Some("whenever".to_string());
        assert!(payload.validate().is_err());
    }
}
