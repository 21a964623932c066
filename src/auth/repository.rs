// Database repository for user records

use crate::auth::{
    error::AuthError,
    models::{UpdateUserRequest, User},
};
use sqlx::PgPool;

const USER_COLUMNS: &str = "user_id, first_name, last_name, email, password, contact_phone, \
                            address, role, is_verified, verification_code, created_at, updated_at";

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new unverified user
    ///
    /// The unique constraint on email is the backstop for the
    /// check-then-insert race: a concurrent duplicate surfaces here as a
    /// unique violation and is reported as `EmailAlreadyExists`, not a 500.
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
        verification_code: &str,
    ) -> Result<User, AuthError> {
        let query = format!(
            "INSERT INTO users (first_name, last_name, email, password, verification_code) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(password_hash)
            .bind(verification_code)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AuthError::EmailAlreadyExists;
                    }
                }
                AuthError::DatabaseError(e.to_string())
            })?;

        Ok(user)
    }

    /// Find a user by email (exact match on the indexed column)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AuthError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Check if an email is already taken
    pub async fn email_exists(&self, email: &str) -> Result<bool, AuthError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(exists.0)
    }

    /// List all users
    pub async fn list_all(&self) -> Result<Vec<User>, AuthError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY user_id");
        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(users)
    }

    /// Flip the account to verified and clear the code in a single UPDATE
    pub async fn mark_verified(&self, email: &str) -> Result<Option<User>, AuthError> {
        let query = format!(
            "UPDATE users SET is_verified = TRUE, verification_code = NULL, updated_at = NOW() \
             WHERE email = $1 RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Apply a partial update, keeping existing values for omitted fields
    ///
    /// `password_hash` is supplied by the service after re-hashing; this
    /// layer never sees a plaintext password.
    pub async fn update_user(
        &self,
        id: i32,
        patch: &UpdateUserRequest,
        password_hash: Option<String>,
    ) -> Result<Option<User>, AuthError> {
        let query = format!(
            "UPDATE users SET \
                first_name = COALESCE($1, first_name), \
                last_name = COALESCE($2, last_name), \
                contact_phone = COALESCE($3, contact_phone), \
                address = COALESCE($4, address), \
                role = COALESCE($5, role), \
                password = COALESCE($6, password), \
                updated_at = NOW() \
             WHERE user_id = $7 RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&patch.first_name)
            .bind(&patch.last_name)
            .bind(&patch.contact_phone)
            .bind(&patch.address)
            .bind(patch.role)
            .bind(password_hash)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Delete a user row directly; dependent rows are the operator's problem
    pub async fn delete_user(&self, id: i32) -> Result<bool, AuthError> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
