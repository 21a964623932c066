use crate::appointments::{Appointment, CreateAppointment, UpdateAppointment};
use crate::error::ApiError;
use sqlx::PgPool;

const APPOINTMENT_COLUMNS: &str = "appointment_id, user_id, doctor_id, appointment_date, \
                                   time_slot, total_amount, appointment_status, notes, \
                                   cancellation_reason, created_at, updated_at";

/// Repository for database operations on appointments
#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Appointment>, ApiError> {
        let query = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY appointment_id");
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(appointments)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, ApiError> {
        let query = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE appointment_id = $1");
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(appointment)
    }

    /// Appointments booked by one patient
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Appointment>, ApiError> {
        let query = format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE user_id = $1 ORDER BY appointment_date, time_slot"
        );
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(appointments)
    }

    pub async fn create(&self, payload: &CreateAppointment) -> Result<Appointment, ApiError> {
        let query = format!(
            "INSERT INTO appointments (user_id, doctor_id, appointment_date, time_slot, \
             total_amount, notes) VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {APPOINTMENT_COLUMNS}"
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(payload.user_id)
            .bind(payload.doctor_id)
            .bind(payload.appointment_date)
            .bind(payload.time_slot)
            .bind(payload.total_amount)
            .bind(&payload.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(appointment)
    }

    pub async fn update(
        &self,
        id: i32,
        patch: &UpdateAppointment,
    ) -> Result<Option<Appointment>, ApiError> {
        let query = format!(
            "UPDATE appointments SET \
                appointment_date = COALESCE($1, appointment_date), \
                time_slot = COALESCE($2, time_slot), \
                total_amount = COALESCE($3, total_amount), \
                appointment_status = COALESCE($4, appointment_status), \
                notes = COALESCE($5, notes), \
                cancellation_reason = COALESCE($6, cancellation_reason), \
                updated_at = NOW() \
             WHERE appointment_id = $7 RETURNING {APPOINTMENT_COLUMNS}"
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(patch.appointment_date)
            .bind(patch.time_slot)
            .bind(patch.total_amount)
            .bind(patch.appointment_status)
            .bind(&patch.notes)
            .bind(&patch.cancellation_reason)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(appointment)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM appointments WHERE appointment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
