//! Teacher salary payment repository implementation

use sqlx::SqlitePool;

use crate::models::teacher::{TeacherPayment, CreateTeacherPaymentRequest};
use crate::utils::errors::AcademyError;

#[derive(Clone)]
#[derive(Debug)]
pub struct TeacherPaymentRepository {
    pool: SqlitePool,
}

impl TeacherPaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a salary payment
    pub async fn create(&self, request: CreateTeacherPaymentRequest) -> Result<TeacherPayment, AcademyError> {
        let payment = sqlx::query_as::<_, TeacherPayment>(
            r#"
            INSERT INTO teacher_payments (teacher_id, amount, payment_date, month_year)
            VALUES (?, ?, ?, ?)
            RETURNING id, teacher_id, amount, payment_date, month_year
            "#
        )
        .bind(request.teacher_id)
        .bind(request.amount)
        .bind(request.payment_date)
        .bind(request.month_year)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    /// Salary history of one teacher, newest first
    pub async fn list_for_teacher(&self, teacher_id: i64) -> Result<Vec<TeacherPayment>, AcademyError> {
        let payments = sqlx::query_as::<_, TeacherPayment>(
            r#"
            SELECT id, teacher_id, amount, payment_date, month_year
            FROM teacher_payments
            WHERE teacher_id = ?
            ORDER BY payment_date DESC, id DESC
            "#
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    pub async fn total_for_teacher(&self, teacher_id: i64) -> Result<f64, AcademyError> {
        let total: (f64,) = sqlx::query_as(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM teacher_payments WHERE teacher_id = ?"
        )
        .bind(teacher_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total.0)
    }

    /// Sum of every salary payment on record
    pub async fn total_all(&self) -> Result<f64, AcademyError> {
        let total: (f64,) = sqlx::query_as(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM teacher_payments"
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total.0)
    }
}
