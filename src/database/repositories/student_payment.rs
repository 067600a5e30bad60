//! Student fee payment repository implementation

use sqlx::SqlitePool;

use crate::models::student::{StudentPayment, CreateStudentPaymentRequest};
use crate::utils::errors::AcademyError;

#[derive(Clone)]
#[derive(Debug)]
pub struct StudentPaymentRepository {
    pool: SqlitePool,
}

impl StudentPaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a fee payment
    pub async fn create(&self, request: CreateStudentPaymentRequest) -> Result<StudentPayment, AcademyError> {
        let payment = sqlx::query_as::<_, StudentPayment>(
            r#"
            INSERT INTO student_payments (student_id, amount, payment_method, payment_date, month_year)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, student_id, amount, payment_method, payment_date, month_year
            "#
        )
        .bind(request.student_id)
        .bind(request.amount)
        .bind(request.payment_method)
        .bind(request.payment_date)
        .bind(request.month_year)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    /// Payment history of one student, newest first
    pub async fn list_for_student(&self, student_id: i64) -> Result<Vec<StudentPayment>, AcademyError> {
        let payments = sqlx::query_as::<_, StudentPayment>(
            r#"
            SELECT id, student_id, amount, payment_method, payment_date, month_year
            FROM student_payments
            WHERE student_id = ?
            ORDER BY payment_date DESC, id DESC
            "#
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Sum of all payments made by one student
    pub async fn total_for_student(&self, student_id: i64) -> Result<f64, AcademyError> {
        let total: (f64,) = sqlx::query_as(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM student_payments WHERE student_id = ?"
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total.0)
    }

    /// Sum of every fee payment on record
    pub async fn total_all(&self) -> Result<f64, AcademyError> {
        let total: (f64,) = sqlx::query_as(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM student_payments"
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repositories::StudentRepository;
    use crate::database::test_pool;
    use crate::models::CreateStudentRequest;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_history_and_totals() {
        let pool = test_pool().await;
        let students = StudentRepository::new(pool.clone());
        let payments = StudentPaymentRepository::new(pool);

        let student = students
            .create(CreateStudentRequest {
                name: "Omar".to_string(),
                class_name: "8th Grade".to_string(),
                monthly_fee: 800.0,
                date_added: date(2024, 1, 3),
            })
            .await
            .unwrap();

        assert_eq!(payments.total_for_student(student.id).await.unwrap(), 0.0);
        assert_eq!(payments.total_all().await.unwrap(), 0.0);

        for (day, amount, month) in [(5, 800.0, "January 2024"), (20, 400.5, "March 2024"), (9, 800.0, "February 2024")] {
            payments
                .create(CreateStudentPaymentRequest {
                    student_id: student.id,
                    amount,
                    payment_method: "Cash".to_string(),
                    payment_date: date(2024, 3, day),
                    month_year: month.to_string(),
                })
                .await
                .unwrap();
        }

        let history = payments.list_for_student(student.id).await.unwrap();
        let months: Vec<&str> = history.iter().map(|p| p.month_year.as_str()).collect();
        assert_eq!(months, vec!["March 2024", "February 2024", "January 2024"]);

        assert_eq!(payments.total_for_student(student.id).await.unwrap(), 2000.5);
        assert_eq!(payments.total_all().await.unwrap(), 2000.5);
    }

    #[tokio::test]
    async fn test_payment_for_missing_student_is_rejected() {
        let payments = StudentPaymentRepository::new(test_pool().await);

        let result = payments
            .create(CreateStudentPaymentRequest {
                student_id: 999,
                amount: 10.0,
                payment_method: "Cash".to_string(),
                payment_date: date(2024, 3, 1),
                month_year: "March 2024".to_string(),
            })
            .await;

        assert!(result.is_err());
    }
}
