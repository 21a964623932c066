use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Payment lifecycle status, stored as the `payment_status` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// Payment row against an appointment
///
/// Amounts are fixed-point `Decimal`, never floats.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i32,
    pub appointment_id: i32,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub payment_method: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for recording a payment
///
/// `transaction_id` is optional; one is generated when the gateway did not
/// supply a reference.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub appointment_id: i32,
    pub amount: Decimal,
    #[validate(length(max = 255))]
    pub transaction_id: Option<String>,
    #[validate(length(max = 50))]
    pub payment_method: Option<String>,
}

/// Request DTO for partially updating a payment
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayment {
    pub amount: Option<Decimal>,
    pub payment_status: Option<PaymentStatus>,
    #[validate(length(max = 255))]
    pub transaction_id: Option<String>,
    #[validate(length(max = 50))]
    pub payment_method: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_round_trips_as_fixed_point() {
        let payload: CreatePayment = serde_json::from_value(serde_json::json!({
            "appointmentId": 5,
            "amount": "1499.99"
        }))
        .unwrap();
        assert_eq!(payload.amount, dec!(1499.99));
    }

    #[test]
    fn status_labels_match_database_enum() {
        assert_eq!(
            serde_json::to_value(PaymentStatus::Refunded).unwrap(),
            "Refunded"
        );
    }
}
