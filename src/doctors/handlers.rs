// CRUD handlers for /api/doctor

use crate::auth::{AuthenticatedUser, Role};
use crate::doctors::{CreateDoctor, Doctor, DoctorRepository, UpdateDoctor};
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/doctor",
    responses(
        (status = 200, description = "All doctor profiles", body = Vec<Doctor>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "doctors"
)]
pub async fn list_doctors(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Doctor>>, ApiError> {
    let doctors = DoctorRepository::new(state.db.clone()).list_all().await?;
    tracing::debug!("Retrieved {} doctors", doctors.len());
    Ok(Json(doctors))
}

#[utoipa::path(
    get,
    path = "/api/doctor/{id}",
    params(("id" = i32, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "Doctor found", body = Doctor),
        (status = 404, description = "Doctor not found")
    ),
    tag = "doctors"
)]
pub async fn get_doctor(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Doctor>, ApiError> {
    let doctor = DoctorRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Doctor",
            id,
        })?;
    Ok(Json(doctor))
}

#[utoipa::path(
    post,
    path = "/api/doctor",
    request_body = CreateDoctor,
    responses(
        (status = 201, description = "Doctor profile created", body = Doctor),
        (status = 400, description = "Invalid input")
    ),
    tag = "doctors"
)]
pub async fn create_doctor(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateDoctor>,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    payload.validate()?;
    let doctor = DoctorRepository::new(state.db.clone()).create(&payload).await?;
    tracing::info!("Created doctor profile {}", doctor.doctor_id);
    Ok((StatusCode::CREATED, Json(doctor)))
}

#[utoipa::path(
    put,
    path = "/api/doctor/{id}",
    params(("id" = i32, Path, description = "Doctor ID")),
    request_body = UpdateDoctor,
    responses(
        (status = 200, description = "Doctor updated", body = Doctor),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Doctor not found")
    ),
    tag = "doctors"
)]
pub async fn update_doctor(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDoctor>,
) -> Result<Json<Doctor>, ApiError> {
    payload.validate()?;
    let doctor = DoctorRepository::new(state.db.clone())
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Doctor",
            id,
        })?;
    Ok(Json(doctor))
}

#[utoipa::path(
    delete,
    path = "/api/doctor/{id}",
    params(("id" = i32, Path, description = "Doctor ID")),
    responses(
        (status = 204, description = "Doctor deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Doctor not found")
    ),
    tag = "doctors"
)]
pub async fn delete_doctor(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if auth.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    let deleted = DoctorRepository::new(state.db.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            resource: "Doctor",
            id,
        });
    }
    tracing::info!("Deleted doctor profile {}", id);
    Ok(StatusCode::NO_CONTENT)
}
