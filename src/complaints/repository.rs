use crate::complaints::{Complaint, ComplaintStatus, CreateComplaint, UpdateComplaint};
use crate::error::ApiError;
use sqlx::PgPool;

const COMPLAINT_COLUMNS: &str = "complaint_id, user_id, related_appointment_id, subject, \
                                 description, status, admin_response, priority, resolved_at, \
                                 assigned_to, created_at, updated_at";

/// Repository for database operations on complaints
#[derive(Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Complaint>, ApiError> {
        let query = format!("SELECT {COMPLAINT_COLUMNS} FROM complaints ORDER BY complaint_id");
        let complaints = sqlx::query_as::<_, Complaint>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(complaints)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Complaint>, ApiError> {
        let query = format!("SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE complaint_id = $1");
        let complaint = sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(complaint)
    }

    pub async fn create(&self, payload: &CreateComplaint) -> Result<Complaint, ApiError> {
        let query = format!(
            "INSERT INTO complaints (user_id, related_appointment_id, subject, description, \
             priority) VALUES ($1, $2, $3, $4, COALESCE($5, 'Medium')) \
             RETURNING {COMPLAINT_COLUMNS}"
        );
        let complaint = sqlx::query_as::<_, Complaint>(&query)
            .bind(payload.user_id)
            .bind(payload.related_appointment_id)
            .bind(&payload.subject)
            .bind(&payload.description)
            .bind(&payload.priority)
            .fetch_one(&self.pool)
            .await?;
        Ok(complaint)
    }

    /// Partial update; moving to Resolved stamps `resolved_at`
    pub async fn update(
        &self,
        id: i32,
        patch: &UpdateComplaint,
    ) -> Result<Option<Complaint>, ApiError> {
        let resolved = patch.status == Some(ComplaintStatus::Resolved);
        let query = format!(
            "UPDATE complaints SET \
                subject = COALESCE($1, subject), \
                description = COALESCE($2, description), \
                status = COALESCE($3, status), \
                admin_response = COALESCE($4, admin_response), \
                priority = COALESCE($5, priority), \
                assigned_to = COALESCE($6, assigned_to), \
                resolved_at = CASE WHEN $7 THEN NOW() ELSE resolved_at END, \
                updated_at = NOW() \
             WHERE complaint_id = $8 RETURNING {COMPLAINT_COLUMNS}"
        );
        let complaint = sqlx::query_as::<_, Complaint>(&query)
            .bind(&patch.subject)
            .bind(&patch.description)
            .bind(patch.status)
            .bind(&patch.admin_response)
            .bind(&patch.priority)
            .bind(patch.assigned_to)
            .bind(resolved)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(complaint)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM complaints WHERE complaint_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
