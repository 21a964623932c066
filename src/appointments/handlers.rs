// CRUD handlers for /api/appointments

use crate::appointments::{
    Appointment, AppointmentRepository, CreateAppointment, UpdateAppointment,
};
use crate::auth::{AuthenticatedUser, Role};
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
    path = "/api/appointments",
    responses(
        (status = 200, description = "All appointments", body = Vec<Appointment>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "appointments"
)]
pub async fn list_appointments(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let appointments = AppointmentRepository::new(state.db.clone()).list_all().await?;
    Ok(Json(appointments))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment found", body = Appointment),
        (status = 404, description = "Appointment not found")
    ),
    tag = "appointments"
)]
pub async fn get_appointment(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Appointment>, ApiError> {
    let appointment = AppointmentRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Appointment",
            id,
        })?;
    Ok(Json(appointment))
}

#[utoipa::path(
    get,
    path = "/api/appointments/user/{user_id}",
    params(("user_id" = i32, Path, description = "Patient user ID")),
    responses(
        (status = 200, description = "Appointments booked by the user", body = Vec<Appointment>),
        (status = 403, description = "Not allowed to read this user's appointments")
    ),
    tag = "appointments"
)]
pub async fn list_appointments_by_user(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    // Patients see their own bookings; admins see anyone's
    if !auth.can_access_user(user_id) {
        return Err(ApiError::Forbidden);
    }
    let appointments = AppointmentRepository::new(state.db.clone())
        .find_by_user(user_id)
        .await?;
    Ok(Json(appointments))
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointment,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Invalid input or unknown user/doctor")
    ),
    tag = "appointments"
)]
pub async fn create_appointment(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointment>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    payload.validate()?;
    let appointment = AppointmentRepository::new(state.db.clone())
        .create(&payload)
        .await?;
    tracing::info!(
        "Booked appointment {} for user {} with doctor {}",
        appointment.appointment_id,
        appointment.user_id,
        appointment.doctor_id
    );
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointment,
    responses(
        (status = 200, description = "Appointment updated", body = Appointment),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Appointment not found")
    ),
    tag = "appointments"
)]
pub async fn update_appointment(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointment>,
) -> Result<Json<Appointment>, ApiError> {
    payload.validate()?;
    let appointment = AppointmentRepository::new(state.db.clone())
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Appointment",
            id,
        })?;
    Ok(Json(appointment))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Appointment not found")
    ),
    tag = "appointments"
)]
pub async fn delete_appointment(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if auth.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    let deleted = AppointmentRepository::new(state.db.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            resource: "Appointment",
            id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
