// Error handling for the resource layer
// Provides the shared error type returned by all CRUD handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, error, warn};

/// Main error type for the resource API
/// All resource handlers return Result<T, ApiError>
///
/// Each variant maps to a specific HTTP status code. Database and internal
/// errors are logged server-side and surface only a generic message to the
/// client.
#[derive(Debug)]
pub enum ApiError {
    /// Request validation failed
    /// Maps to HTTP 400 Bad Request
    ValidationError(validator::ValidationErrors),

    /// Resource not found by ID
    /// Maps to HTTP 404 Not Found
    NotFound { resource: &'static str, id: i32 },

    /// Referenced row (user, doctor, appointment) does not exist
    /// Maps to HTTP 400 Bad Request
    InvalidReference { message: String },

    /// Caller's role does not permit the operation
    /// Maps to HTTP 403 Forbidden
    Forbidden,

    /// Database operation errors
    /// Maps to HTTP 500 Internal Server Error
    DatabaseError(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);
                (StatusCode::BAD_REQUEST, format!("Validation failed: {}", errors))
            }
            ApiError::NotFound { resource, id } => {
                debug!("{} with id {} not found", resource, id);
                (
                    StatusCode::NOT_FOUND,
                    format!("{} with id {} not found", resource, id),
                )
            }
            ApiError::InvalidReference { message } => {
                warn!("Invalid reference: {}", message);
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::Forbidden => {
                warn!("Forbidden resource access attempt");
                (StatusCode::FORBIDDEN, "Insufficient permissions".to_string())
            }
            ApiError::DatabaseError(db_error) => {
                // Full detail stays in the server log; clients get a generic body
                error!("Database error: {:?}", db_error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidReference { .. } => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert sqlx errors to ApiError
///
/// A foreign-key violation means the payload referenced a row that does not
/// exist; that is a client error, not a server fault.
impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &error {
            if db_err.is_foreign_key_violation() {
                return ApiError::InvalidReference {
                    message: "Referenced record does not exist".to_string(),
                };
            }
        }
        ApiError::DatabaseError(error)
    }
}

/// Convert validator errors to ApiError
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound {
            resource: "Appointment",
            id: 7,
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_error_maps_to_400() {
        let err = ApiError::ValidationError(validator::ValidationErrors::new());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn forbidden_maps_to_403() {
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = ApiError::DatabaseError(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
