// Payment records for appointments

pub mod handlers;
pub mod models;
pub mod repository;

pub use models::*;
pub use repository::PaymentRepository;
