// CRUD handlers for /api/prescription
// Writes are restricted to doctors and admins

use crate::auth::{AuthenticatedUser, Role};
use crate::error::ApiError;
use crate::prescriptions::{
    CreatePrescription, Prescription, PrescriptionRepository, UpdatePrescription,
};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/prescription",
    responses(
        (status = 200, description = "All prescriptions", body = Vec<Prescription>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "prescriptions"
)]
pub async fn list_prescriptions(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Prescription>>, ApiError> {
    let prescriptions = PrescriptionRepository::new(state.db.clone()).list_all().await?;
    Ok(Json(prescriptions))
}

#[utoipa::path(
    get,
    path = "/api/prescription/{id}",
    params(("id" = i32, Path, description = "Prescription ID")),
    responses(
        (status = 200, description = "Prescription found", body = Prescription),
        (status = 404, description = "Prescription not found")
    ),
    tag = "prescriptions"
)]
pub async fn get_prescription(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Prescription>, ApiError> {
    let prescription = PrescriptionRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Prescription",
            id,
        })?;
    Ok(Json(prescription))
}

#[utoipa::path(
    post,
    path = "/api/prescription",
    request_body = CreatePrescription,
    responses(
        (status = 201, description = "Prescription issued", body = Prescription),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Caller is not a doctor or admin")
    ),
    tag = "prescriptions"
)]
pub async fn create_prescription(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePrescription>,
) -> Result<(StatusCode, Json<Prescription>), ApiError> {
    if auth.role == Role::User {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;
    let prescription = PrescriptionRepository::new(state.db.clone())
        .create(&payload)
        .await?;
    tracing::info!(
        "Issued prescription {} for patient {}",
        prescription.prescription_id,
        prescription.patient_id
    );
    Ok((StatusCode::CREATED, Json(prescription)))
}

#[utoipa::path(
    put,
    path = "/api/prescription/{id}",
    params(("id" = i32, Path, description = "Prescription ID")),
    request_body = UpdatePrescription,
    responses(
        (status = 200, description = "Prescription updated", body = Prescription),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Caller is not a doctor or admin"),
        (status = 404, description = "Prescription not found")
    ),
    tag = "prescriptions"
)]
pub async fn update_prescription(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePrescription>,
) -> Result<Json<Prescription>, ApiError> {
    if auth.role == Role::User {
        return Err(ApiError::Forbidden);
    }
    payload.validate()?;
    let prescription = PrescriptionRepository::new(state.db.clone())
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Prescription",
            id,
        })?;
    Ok(Json(prescription))
}

#[utoipa::path(
    delete,
    path = "/api/prescription/{id}",
    params(("id" = i32, Path, description = "Prescription ID")),
    responses(
        (status = 204, description = "Prescription deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Prescription not found")
    ),
    tag = "prescriptions"
)]
pub async fn delete_prescription(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if auth.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    let deleted = PrescriptionRepository::new(state.db.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            resource: "Prescription",
            id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
