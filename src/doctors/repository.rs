use crate::doctors::{CreateDoctor, Doctor, UpdateDoctor};
use crate::error::ApiError;
use sqlx::PgPool;

const DOCTOR_COLUMNS: &str = "doctor_id, user_id, first_name, last_name, specialization, \
                              contact_phone, available_days, consultation_fee, biography, \
                              is_active, created_at, updated_at";

/// Repository for database operations on doctor profiles
#[derive(Clone)]
pub struct DoctorRepository {
    pool: PgPool,
}

impl DoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Doctor>, ApiError> {
        let query = format!("SELECT {DOCTOR_COLUMNS} FROM doctors ORDER BY doctor_id");
        let doctors = sqlx::query_as::<_, Doctor>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(doctors)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Doctor>, ApiError> {
        let query = format!("SELECT {DOCTOR_COLUMNS} FROM doctors WHERE doctor_id = $1");
        let doctor = sqlx::query_as::<_, Doctor>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doctor)
    }

    pub async fn create(&self, payload: &CreateDoctor) -> Result<Doctor, ApiError> {
        let query = format!(
            "INSERT INTO doctors (user_id, first_name, last_name, specialization, \
             contact_phone, available_days, consultation_fee, biography) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {DOCTOR_COLUMNS}"
        );
        let doctor = sqlx::query_as::<_, Doctor>(&query)
            .bind(payload.user_id)
            .bind(&payload.first_name)
            .bind(&payload.last_name)
            .bind(&payload.specialization)
            .bind(&payload.contact_phone)
            .bind(&payload.available_days)
            .bind(payload.consultation_fee)
            .bind(&payload.biography)
            .fetch_one(&self.pool)
            .await?;
        Ok(doctor)
    }

    /// Partial update; omitted fields keep their stored values
    pub async fn update(&self, id: i32, patch: &UpdateDoctor) -> Result<Option<Doctor>, ApiError> {
        let query = format!(
            "UPDATE doctors SET \
                first_name = COALESCE($1, first_name), \
                last_name = COALESCE($2, last_name), \
                specialization = COALESCE($3, specialization), \
                contact_phone = COALESCE($4, contact_phone), \
                available_days = COALESCE($5, available_days), \
                consultation_fee = COALESCE($6, consultation_fee), \
                biography = COALESCE($7, biography), \
                is_active = COALESCE($8, is_active), \
                updated_at = NOW() \
             WHERE doctor_id = $9 RETURNING {DOCTOR_COLUMNS}"
        );
        let doctor = sqlx::query_as::<_, Doctor>(&query)
            .bind(&patch.first_name)
            .bind(&patch.last_name)
            .bind(&patch.specialization)
            .bind(&patch.contact_phone)
            .bind(&patch.available_days)
            .bind(patch.consultation_fee)
            .bind(&patch.biography)
            .bind(patch.is_active)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doctor)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM doctors WHERE doctor_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
