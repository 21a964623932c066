use crate::error::ApiError;
use crate::prescriptions::{CreatePrescription, Prescription, UpdatePrescription};
use sqlx::PgPool;

const PRESCRIPTION_COLUMNS: &str = "prescription_id, appointment_id, doctor_id, patient_id, \
                                    medications, dosage, instructions, notes, created_at, \
                                    updated_at";

/// Repository for database operations on prescriptions
#[derive(Clone)]
pub struct PrescriptionRepository {
    pool: PgPool,
}

impl PrescriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Prescription>, ApiError> {
        let query = format!("SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions ORDER BY prescription_id");
        let prescriptions = sqlx::query_as::<_, Prescription>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(prescriptions)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Prescription>, ApiError> {
        let query = format!("SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE prescription_id = $1");
        let prescription = sqlx::query_as::<_, Prescription>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(prescription)
    }

    pub async fn create(&self, payload: &CreatePrescription) -> Result<Prescription, ApiError> {
        let query = format!(
            "INSERT INTO prescriptions (appointment_id, doctor_id, patient_id, medications, \
             dosage, instructions, notes) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PRESCRIPTION_COLUMNS}"
        );
        let prescription = sqlx::query_as::<_, Prescription>(&query)
            .bind(payload.appointment_id)
            .bind(payload.doctor_id)
            .bind(payload.patient_id)
            .bind(&payload.medications)
            .bind(&payload.dosage)
            .bind(&payload.instructions)
            .bind(&payload.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(prescription)
    }

    pub async fn update(
        &self,
        id: i32,
        patch: &UpdatePrescription,
    ) -> Result<Option<Prescription>, ApiError> {
        let query = format!(
            "UPDATE prescriptions SET \
                medications = COALESCE($1, medications), \
                dosage = COALESCE($2, dosage), \
                instructions = COALESCE($3, instructions), \
                notes = COALESCE($4, notes), \
                updated_at = NOW() \
             WHERE prescription_id = $5 RETURNING {PRESCRIPTION_COLUMNS}"
        );
        let prescription = sqlx::query_as::<_, Prescription>(&query)
            .bind(&patch.medications)
            .bind(&patch.dosage)
            .bind(&patch.instructions)
            .bind(&patch.notes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(prescription)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM prescriptions WHERE prescription_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
