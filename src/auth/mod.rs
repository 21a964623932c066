// Authentication module
// Registration with email verification, JWT-based login, and role guards

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use error::AuthError;
pub use middleware::{AuthenticatedUser, RequireRole};
pub use models::{
    AuthResponse, LoginRequest, RegisterRequest, Role, UpdateUserRequest, User, UserResponse,
    VerifyRequest, VerifyResponse,
};
pub use service::AuthService;
