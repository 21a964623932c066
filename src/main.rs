mod appointments;
mod auth;
mod complaints;
mod db;
mod doctors;
mod error;
mod mailer;
mod payments;
mod prescriptions;
mod validation;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{repository::UserRepository, token::TokenService, AuthService, RequireRole};
use mailer::Mailer;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::verify_handler,
        auth::handlers::login_handler,
        auth::handlers::list_users_handler,
        auth::handlers::get_user_handler,
        auth::handlers::update_user_handler,
        auth::handlers::delete_user_handler,
        doctors::handlers::list_doctors,
        doctors::handlers::get_doctor,
        doctors::handlers::create_doctor,
        doctors::handlers::update_doctor,
        doctors::handlers::delete_doctor,
        appointments::handlers::list_appointments,
        appointments::handlers::get_appointment,
        appointments::handlers::list_appointments_by_user,
        appointments::handlers::create_appointment,
        appointments::handlers::update_appointment,
        appointments::handlers::delete_appointment,
        prescriptions::handlers::list_prescriptions,
        prescriptions::handlers::get_prescription,
        prescriptions::handlers::create_prescription,
        prescriptions::handlers::update_prescription,
        prescriptions::handlers::delete_prescription,
        payments::handlers::list_payments,
        payments::handlers::get_payment,
        payments::handlers::create_payment,
        payments::handlers::update_payment,
        payments::handlers::delete_payment,
        complaints::handlers::list_complaints,
        complaints::handlers::get_complaint,
        complaints::handlers::create_complaint,
        complaints::handlers::update_complaint,
        complaints::handlers::delete_complaint,
    ),
    components(schemas(
        auth::models::Role,
        auth::models::UserResponse,
        auth::models::RegisterRequest,
        auth::models::VerifyRequest,
        auth::models::LoginRequest,
        auth::models::UpdateUserRequest,
        auth::models::AuthResponse,
        auth::models::VerifyResponse,
        doctors::models::Doctor,
        doctors::models::CreateDoctor,
        doctors::models::UpdateDoctor,
        appointments::models::Appointment,
        appointments::models::AppointmentStatus,
        appointments::models::CreateAppointment,
        appointments::models::UpdateAppointment,
        prescriptions::models::Prescription,
        prescriptions::models::CreatePrescription,
        prescriptions::models::UpdatePrescription,
        payments::models::Payment,
        payments::models::PaymentStatus,
        payments::models::CreatePayment,
        payments::models::UpdatePayment,
        complaints::models::Complaint,
        complaints::models::ComplaintStatus,
        complaints::models::CreateComplaint,
        complaints::models::UpdateComplaint,
    )),
    tags(
        (name = "auth", description = "Registration, verification, login, and user management"),
        (name = "doctors", description = "Doctor profile management"),
        (name = "appointments", description = "Appointment booking"),
        (name = "prescriptions", description = "Prescription records"),
        (name = "payments", description = "Payment records"),
        (name = "complaints", description = "Patient complaints"),
    ),
    info(
        title = "SwiftCare API",
        version = "1.0.0",
        description = "RESTful API for a medical appointment platform",
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth: AuthService,
}

/// Health check handler
async fn health() -> &'static str {
    "SwiftCare API is running"
}

/// Creates and configures the application router
///
/// Maps all API endpoints to their handlers, wires the admin guard onto the
/// user-listing route, and adds CORS.
pub fn create_router(db: PgPool, token_service: TokenService, mailer: Mailer) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let auth_service = AuthService::new(UserRepository::new(db.clone()), token_service, mailer);
    let state = AppState {
        db,
        auth: auth_service,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health check
        .route("/", get(health))
        // Auth routes
        .route("/api/auth/register", post(auth::handlers::register_handler))
        .route("/api/auth/verify", post(auth::handlers::verify_handler))
        .route("/api/auth/login", post(auth::handlers::login_handler))
        .route(
            "/api/auth/users",
            get(auth::handlers::list_users_handler)
                .layer(middleware::from_fn(|req, next| {
                    RequireRole::admin().middleware(req, next)
                })),
        )
        .route(
            "/api/auth/user/:id",
            get(auth::handlers::get_user_handler)
                .put(auth::handlers::update_user_handler)
                .delete(auth::handlers::delete_user_handler),
        )
        // Doctor routes
        .route("/api/doctor", get(doctors::handlers::list_doctors))
        .route("/api/doctor", post(doctors::handlers::create_doctor))
        .route("/api/doctor/:id", get(doctors::handlers::get_doctor))
        .route("/api/doctor/:id", put(doctors::handlers::update_doctor))
        .route("/api/doctor/:id", delete(doctors::handlers::delete_doctor))
        // Appointment routes
        .route("/api/appointments", get(appointments::handlers::list_appointments))
        .route("/api/appointments", post(appointments::handlers::create_appointment))
        .route(
            "/api/appointments/user/:user_id",
            get(appointments::handlers::list_appointments_by_user),
        )
        .route("/api/appointments/:id", get(appointments::handlers::get_appointment))
        .route("/api/appointments/:id", put(appointments::handlers::update_appointment))
        .route("/api/appointments/:id", delete(appointments::handlers::delete_appointment))
        // Prescription routes
        .route("/api/prescription", get(prescriptions::handlers::list_prescriptions))
        .route("/api/prescription", post(prescriptions::handlers::create_prescription))
        .route("/api/prescription/:id", get(prescriptions::handlers::get_prescription))
        .route("/api/prescription/:id", put(prescriptions::handlers::update_prescription))
        .route("/api/prescription/:id", delete(prescriptions::handlers::delete_prescription))
        // Payment routes
        .route("/api/payments", get(payments::handlers::list_payments))
        .route("/api/payments", post(payments::handlers::create_payment))
        .route("/api/payments/:id", get(payments::handlers::get_payment))
        .route("/api/payments/:id", put(payments::handlers::update_payment))
        .route("/api/payments/:id", delete(payments::handlers::delete_payment))
        // Complaint routes
        .route("/api/complaints", get(complaints::handlers::list_complaints))
        .route("/api/complaints", post(complaints::handlers::create_complaint))
        .route("/api/complaints/:id", get(complaints::handlers::get_complaint))
        .route("/api/complaints/:id", put(complaints::handlers::update_complaint))
        .route("/api/complaints/:id", delete(complaints::handlers::delete_complaint))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("SwiftCare API - Starting...");

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let mailer = Mailer::from_env().expect("Failed to configure mailer");

    let app = create_router(db_pool, TokenService::new(jwt_secret), mailer);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("SwiftCare API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(test)]
mod tests;
