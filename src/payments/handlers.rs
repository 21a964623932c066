// CRUD handlers for /api/payments

use crate::auth::{AuthenticatedUser, Role};
use crate::error::ApiError;
use crate::payments::{CreatePayment, Payment, PaymentRepository, UpdatePayment};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/payments",
    responses(
        (status = 200, description = "All payments", body = Vec<Payment>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "payments"
)]
pub async fn list_payments(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    let payments = PaymentRepository::new(state.db.clone()).list_all().await?;
    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment found", body = Payment),
        (status = 404, description = "Payment not found")
    ),
    tag = "payments"
)]
pub async fn get_payment(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Payment>, ApiError> {
    let payment = PaymentRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Payment",
            id,
        })?;
    Ok(Json(payment))
}

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = CreatePayment,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Invalid input or unknown appointment")
    ),
    tag = "payments"
)]
pub async fn create_payment(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePayment>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    payload.validate()?;
    // Gateways that report no reference still get a traceable id
    let transaction_id = payload
        .transaction_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let payment = PaymentRepository::new(state.db.clone())
        .create(&payload, transaction_id)
        .await?;
    tracing::info!(
        "Recorded payment {} for appointment {}",
        payment.payment_id,
        payment.appointment_id
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePayment,
    responses(
        (status = 200, description = "Payment updated", body = Payment),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Payment not found")
    ),
    tag = "payments"
)]
pub async fn update_payment(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePayment>,
) -> Result<Json<Payment>, ApiError> {
    payload.validate()?;
    let payment = PaymentRepository::new(state.db.clone())
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Payment",
            id,
        })?;
    Ok(Json(payment))
}

#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Payment not found")
    ),
    tag = "payments"
)]
pub async fn delete_payment(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if auth.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    let deleted = PaymentRepository::new(state.db.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            resource: "Payment",
            id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
