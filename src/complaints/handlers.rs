// CRUD handlers for /api/complaints

use crate::auth::{AuthenticatedUser, Role};
use crate::complaints::{Complaint, ComplaintRepository, CreateComplaint, UpdateComplaint};
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
    path = "/api/complaints",
    responses(
        (status = 200, description = "All complaints", body = Vec<Complaint>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "complaints"
)]
pub async fn list_complaints(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    let complaints = ComplaintRepository::new(state.db.clone()).list_all().await?;
    Ok(Json(complaints))
}

#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(("id" = i32, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Complaint found", body = Complaint),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn get_complaint(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Complaint>, ApiError> {
    let complaint = ComplaintRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Complaint",
            id,
        })?;
    Ok(Json(complaint))
}

#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaint,
    responses(
        (status = 201, description = "Complaint filed", body = Complaint),
        (status = 400, description = "Invalid input")
    ),
    tag = "complaints"
)]
pub async fn create_complaint(
    _auth: AuthenticatedUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateComplaint>,
) -> Result<(StatusCode, Json<Complaint>), ApiError> {
    payload.validate()?;
    let complaint = ComplaintRepository::new(state.db.clone()).create(&payload).await?;
    tracing::info!(
        "Filed complaint {} from user {}",
        complaint.complaint_id,
        complaint.user_id
    );
    Ok((StatusCode::CREATED, Json(complaint)))
}

#[utoipa::path(
    put,
    path = "/api/complaints/{id}",
    params(("id" = i32, Path, description = "Complaint ID")),
    request_body = UpdateComplaint,
    responses(
        (status = 200, description = "Complaint updated", body = Complaint),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn update_complaint(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateComplaint>,
) -> Result<Json<Complaint>, ApiError> {
    payload.validate()?;
    // Only admins may respond, reassign, or move the status
    if (payload.admin_response.is_some()
        || payload.assigned_to.is_some()
        || payload.status.is_some())
        && auth.role != Role::Admin
    {
        return Err(ApiError::Forbidden);
    }
    let complaint = ComplaintRepository::new(state.db.clone())
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "Complaint",
            id,
        })?;
    Ok(Json(complaint))
}

#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    params(("id" = i32, Path, description = "Complaint ID")),
    responses(
        (status = 204, description = "Complaint deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn delete_complaint(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if auth.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    let deleted = ComplaintRepository::new(state.db.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            resource: "Complaint",
            id,
        });
    }
    Ok(StatusCode::NO_CONTENT)
}
