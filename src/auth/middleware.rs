// Authentication middleware for protected routes

use crate::auth::{error::AuthError, models::Role, token::TokenService};
use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{header, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

/// Authenticated user extractor for protected routes
///
/// Parses and validates the bearer token; handlers that also need an
/// ownership check (admin-or-self) read `user_id`/`role` from here.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Admin-or-self policy: admins may act on any user, everyone else only
    /// on their own record
    pub fn can_access_user(&self, target_user_id: i32) -> bool {
        self.role == Role::Admin || self.user_id == target_user_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token_from_header(
            parts
                .headers
                .get(header::AUTHORIZATION)
                .ok_or(AuthError::MissingToken)?
                .to_str()
                .map_err(|_| AuthError::InvalidToken)?,
        )?;

        let claims = token_service_from_env()?.validate_token(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

/// Route-level guard requiring the caller's role to be in a fixed set
///
/// Stateless: a pure function of the bearer token and the declared role set.
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
    required: &'static [Role],
}

impl RequireRole {
    /// Admin-only routes
    pub fn admin() -> Self {
        Self {
            required: &[Role::Admin],
        }
    }

    /// Routes open to admins and doctors
    pub fn admin_or_doctor() -> Self {
        Self {
            required: &[Role::Admin, Role::Doctor],
        }
    }

    /// Whether a role satisfies this guard
    pub fn allows(&self, role: Role) -> bool {
        self.required.contains(&role)
    }

    /// Middleware function validating role-based access
    pub async fn middleware(
        self,
        request: Request<Body>,
        next: Next,
    ) -> Result<Response, AuthError> {
        let endpoint = request.uri().path().to_string();

        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(|| {
                warn!("Missing Authorization header for protected endpoint: {}", endpoint);
                AuthError::MissingToken
            })?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        let token = bearer_token_from_header(auth_header)?;
        let claims = token_service_from_env()?.validate_token(token)?;

        if !self.allows(claims.role) {
            warn!(
                "Authorization failed: user_id={}, role={}, endpoint={}",
                claims.sub, claims.role, endpoint
            );
            return Err(AuthError::InsufficientPermissions);
        }

        debug!(
            "Authorization successful: user_id={}, role={}, endpoint={}",
            claims.sub, claims.role, endpoint
        );
        Ok(next.run(request).await)
    }
}

fn bearer_token_from_header(auth_header: &str) -> Result<&str, AuthError> {
    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidToken)
}

fn token_service_from_env() -> Result<TokenService, AuthError> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AuthError::ConfigError("JWT_SECRET not configured".to_string()))?;
    Ok(TokenService::new(secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

    fn set_test_secret() {
        std::env::set_var("JWT_SECRET", TEST_SECRET);
    }

    fn parts_with_auth(auth_value: &str) -> Parts {
        let req = Request::builder()
            .uri("/")
            .header(header::AUTHORIZATION, auth_value)
            .body(())
            .unwrap();
        let (parts, _) = req.into_parts();
        parts
    }

    fn parts_without_auth() -> Parts {
        let req = Request::builder().uri("/").body(()).unwrap();
        let (parts, _) = req.into_parts();
        parts
    }

    #[tokio::test]
    async fn valid_token_is_accepted() {
        set_test_secret();
        let token = TokenService::new(TEST_SECRET.to_string())
            .generate_token(42, Role::Doctor)
            .unwrap();

        let mut parts = parts_with_auth(&format!("Bearer {}", token));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(user.user_id, 42);
        assert_eq!(user.role, Role::Doctor);
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        set_test_secret();
        let mut parts = parts_without_auth();
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn non_bearer_header_is_rejected() {
        set_test_secret();
        let mut parts = parts_with_auth("Basic dXNlcjpwYXNz");
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        set_test_secret();
        let mut parts = parts_with_auth("Bearer not.a.token");
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn admin_guard_allows_only_admin() {
        let guard = RequireRole::admin();
        assert!(guard.allows(Role::Admin));
        assert!(!guard.allows(Role::User));
        assert!(!guard.allows(Role::Doctor));
    }

    #[test]
    fn admin_or_doctor_guard() {
        let guard = RequireRole::admin_or_doctor();
        assert!(guard.allows(Role::Admin));
        assert!(guard.allows(Role::Doctor));
        assert!(!guard.allows(Role::User));
    }

    #[test]
    fn admin_or_self_policy() {
        let admin = AuthenticatedUser {
            user_id: 1,
            role: Role::Admin,
        };
        let user = AuthenticatedUser {
            user_id: 7,
            role: Role::User,
        };

        assert!(admin.can_access_user(99));
        assert!(user.can_access_user(7));
        assert!(!user.can_access_user(8));
    }
}
