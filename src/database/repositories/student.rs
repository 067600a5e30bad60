//! Student repository implementation

use std::time::Instant;

use sqlx::SqlitePool;

use crate::models::student::{Student, CreateStudentRequest, UpdateStudentRequest};
use crate::utils::errors::AcademyError;
use crate::utils::logging::log_database_operation;

const STUDENT_COLUMNS: &str = "id, name, class, monthly_fee, date_added";

#[derive(Clone)]
#[derive(Debug)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new student
    pub async fn create(&self, request: CreateStudentRequest) -> Result<Student, AcademyError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            r#"
            INSERT INTO students (name, class, monthly_fee, date_added)
            VALUES (?, ?, ?, ?)
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.class_name)
        .bind(request.monthly_fee)
        .bind(request.date_added)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    /// Find student by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AcademyError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// List students ordered by name, optionally restricted to one class
    pub async fn list(&self, class_filter: Option<&str>) -> Result<Vec<Student>, AcademyError> {
        match class_filter {
            Some(class_name) => self.list_by_class(class_name).await,
            None => {
                let students = sqlx::query_as::<_, Student>(&format!(
                    "SELECT {STUDENT_COLUMNS} FROM students ORDER BY name, id"
                ))
                .fetch_all(&self.pool)
                .await?;

                Ok(students)
            }
        }
    }

    /// List the students of one class ordered by name
    pub async fn list_by_class(&self, class_name: &str) -> Result<Vec<Student>, AcademyError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE class = ? ORDER BY name, id"
        ))
        .bind(class_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    /// Update name, class and fee. Returns `None` when the student does not exist.
    pub async fn update(&self, id: i64, request: UpdateStudentRequest) -> Result<Option<Student>, AcademyError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            r#"
            UPDATE students
            SET name = ?, class = ?, monthly_fee = ?
            WHERE id = ?
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.class_name)
        .bind(request.monthly_fee)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// Delete a student together with every fee payment they own.
    ///
    /// Returns whether a student row was removed.
    pub async fn delete_with_payments(&self, id: i64) -> Result<bool, AcademyError> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM student_payments WHERE student_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        log_database_operation("delete_with_payments", "students", started.elapsed().as_millis() as u64, true);

        Ok(result.rows_affected() > 0)
    }

    /// Count total students
    pub async fn count(&self) -> Result<i64, AcademyError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
