// Authentication service - business logic layer

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, RegisterRequest, UpdateUserRequest, User},
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
    verification::VerificationCode,
};
use crate::mailer::Mailer;
use validator::Validate;

/// Authentication service coordinating registration, verification, login,
/// and user management
///
/// Account states: a user is created Unverified and becomes Verified exactly
/// once, by submitting the correct code. There is no path back.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    tokens: TokenService,
    mailer: Mailer,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(users: UserRepository, tokens: TokenService, mailer: Mailer) -> Self {
        Self {
            users,
            tokens,
            mailer,
        }
    }

    /// Register a new user account in the Unverified state
    ///
    /// Email delivery failure does not roll back registration; the account
    /// exists regardless of deliverability.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::ValidationError(e.to_string()))?;

        // Fast path rejection; the unique constraint catches the race
        if self.users.email_exists(&request.email).await? {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = hash_blocking(request.password.clone()).await?;
        let code = VerificationCode::generate();

        let user = self
            .users
            .create_user(
                &request.first_name,
                &request.last_name,
                &request.email,
                &password_hash,
                &code,
            )
            .await?;

        tracing::info!("Registered user {} ({})", user.user_id, user.email);

        if let Err(e) = self
            .mailer
            .send_verification_email(&user.email, &user.first_name, &code)
            .await
        {
            tracing::warn!(
                "Failed to send verification email to {}: {}",
                user.email,
                e
            );
        }

        Ok(user)
    }

    /// Verify an account with the emailed code
    ///
    /// A wrong code leaves the account Unverified and is retryable. An
    /// already-verified account has no stored code and rejects any code.
    pub async fn verify(&self, email: &str, code: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        match &user.verification_code {
            Some(stored) if VerificationCode::matches(stored, code) => {}
            _ => return Err(AuthError::InvalidCode),
        }

        let verified = self
            .users
            .mark_verified(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!("User {} verified", verified.user_id);
        Ok(verified)
    }

    /// Authenticate a user and issue a 24-hour session token
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` error. Unverified accounts are gated with
    /// `NotVerified` after the password check, so account state is only
    /// revealed to a caller who holds valid credentials.
    pub async fn login(&self, request: LoginRequest) -> Result<(String, User), AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::ValidationError(e.to_string()))?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = verify_blocking(request.password, user.password.clone()).await?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_verified {
            return Err(AuthError::NotVerified);
        }

        let token = self.tokens.generate_token(user.user_id, user.role)?;
        tracing::info!("User {} logged in", user.user_id);
        Ok((token, user))
    }

    /// List every user record
    pub async fn get_all_users(&self) -> Result<Vec<User>, AuthError> {
        self.users.list_all().await
    }

    /// Fetch a single user by id
    pub async fn get_user(&self, id: i32) -> Result<User, AuthError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Apply a partial update to a user record
    ///
    /// A password in the patch is hashed here; the repository never accepts
    /// a caller-supplied hash.
    pub async fn update_user(
        &self,
        id: i32,
        patch: UpdateUserRequest,
    ) -> Result<User, AuthError> {
        patch
            .validate()
            .map_err(|e| AuthError::ValidationError(e.to_string()))?;

        let password_hash = match &patch.password {
            Some(plaintext) => Some(hash_blocking(plaintext.clone()).await?),
            None => None,
        };

        self.users
            .update_user(id, &patch, password_hash)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Delete a user by id; returns false when no row existed
    pub async fn delete_user(&self, id: i32) -> Result<bool, AuthError> {
        self.users.delete_user(id).await
    }
}

/// Run the adaptive hash off the async dispatch path
async fn hash_blocking(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || PasswordService::hash_password(&password))
        .await
        .map_err(|_| AuthError::PasswordHashError)?
}

async fn verify_blocking(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || PasswordService::verify_password(&password, &hash))
        .await
        .map_err(|_| AuthError::PasswordHashError)?
}
