// HTTP handlers for the auth routes

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{
        AuthResponse, LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse,
        VerifyRequest, VerifyResponse,
    },
};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// Handler for POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created, verification code emailed", body = UserResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already in use")
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    tracing::debug!("Registering new user: {}", payload.email);
    let user = state.auth.register(payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Handler for POST /api/auth/verify
#[utoipa::path(
    post,
    path = "/api/auth/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Account verified", body = VerifyResponse),
        (status = 400, description = "Wrong code"),
        (status = 404, description = "Unknown email")
    ),
    tag = "auth"
)]
pub async fn verify_handler(
    State(state): State<AppState>,
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AuthError> {
    tracing::debug!("Verifying account: {}", payload.email);
    let user = state.auth.verify(&payload.email, &payload.code).await?;
    Ok(Json(VerifyResponse {
        message: "Account verified successfully".to_string(),
        user: user.into(),
    }))
}

/// Handler for POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 403, description = "Account not verified")
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    tracing::debug!("Login attempt: {}", payload.email);
    let (token, user) = state.auth.login(payload).await?;
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Handler for GET /api/auth/users (admin only, enforced at the route layer)
#[utoipa::path(
    get,
    path = "/api/auth/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not an admin")
    ),
    tag = "auth"
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AuthError> {
    let users = state.auth.get_all_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Handler for GET /api/auth/user/:id (admin or the user themselves)
#[utoipa::path(
    get,
    path = "/api/auth/user/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 403, description = "Not allowed to read this user"),
        (status = 404, description = "User not found")
    ),
    tag = "auth"
)]
pub async fn get_user_handler(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AuthError> {
    if !auth.can_access_user(id) {
        return Err(AuthError::InsufficientPermissions);
    }
    let user = state.auth.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Handler for PUT /api/auth/user/:id (admin or the user themselves)
#[utoipa::path(
    put,
    path = "/api/auth/user/{id}",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not allowed to update this user"),
        (status = 404, description = "User not found")
    ),
    tag = "auth"
)]
pub async fn update_user_handler(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AuthError> {
    if !auth.can_access_user(id) {
        return Err(AuthError::InsufficientPermissions);
    }
    // Only admins may change roles
    if payload.role.is_some() && auth.role != crate::auth::models::Role::Admin {
        return Err(AuthError::InsufficientPermissions);
    }
    let user = state.auth.update_user(id, payload).await?;
    Ok(Json(user.into()))
}

/// Handler for DELETE /api/auth/user/:id (admin only)
#[utoipa::path(
    delete,
    path = "/api/auth/user/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "User not found")
    ),
    tag = "auth"
)]
pub async fn delete_user_handler(
    auth: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AuthError> {
    if auth.role != crate::auth::models::Role::Admin {
        return Err(AuthError::InsufficientPermissions);
    }
    if !state.auth.delete_user(id).await? {
        return Err(AuthError::UserNotFound);
    }
    tracing::info!("Deleted user {}", id);
    Ok(StatusCode::NO_CONTENT)
}
