use crate::error::ApiError;
use crate::payments::{CreatePayment, Payment, UpdatePayment};
use sqlx::PgPool;

const PAYMENT_COLUMNS: &str = "payment_id, appointment_id, amount, payment_status, \
                               transaction_id, payment_method, payment_date, created_at, \
                               updated_at";

/// Repository for database operations on payments
#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Payment>, ApiError> {
        let query = format!("SELECT {PAYMENT_COLUMNS} FROM payments ORDER BY payment_id");
        let payments = sqlx::query_as::<_, Payment>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(payments)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, ApiError> {
        let query = format!("SELECT {PAYMENT_COLUMNS} FROM payments WHERE payment_id = $1");
        let payment = sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payment)
    }

    pub async fn create(
        &self,
        payload: &CreatePayment,
        transaction_id: String,
    ) -> Result<Payment, ApiError> {
        let query = format!(
            "INSERT INTO payments (appointment_id, amount, transaction_id, payment_method) \
             VALUES ($1, $2, $3, $4) RETURNING {PAYMENT_COLUMNS}"
        );
        let payment = sqlx::query_as::<_, Payment>(&query)
            .bind(payload.appointment_id)
            .bind(payload.amount)
            .bind(transaction_id)
            .bind(&payload.payment_method)
            .fetch_one(&self.pool)
            .await?;
        Ok(payment)
    }

    pub async fn update(&self, id: i32, patch: &UpdatePayment) -> Result<Option<Payment>, ApiError> {
        let query = format!(
            "UPDATE payments SET \
                amount = COALESCE($1, amount), \
                payment_status = COALESCE($2, payment_status), \
                transaction_id = COALESCE($3, transaction_id), \
                payment_method = COALESCE($4, payment_method), \
                payment_date = COALESCE($5, payment_date), \
                updated_at = NOW() \
             WHERE payment_id = $6 RETURNING {PAYMENT_COLUMNS}"
        );
        let payment = sqlx::query_as::<_, Payment>(&query)
            .bind(patch.amount)
            .bind(patch.payment_status)
            .bind(&patch.transaction_id)
            .bind(&patch.payment_method)
            .bind(patch.payment_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payment)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM payments WHERE payment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
