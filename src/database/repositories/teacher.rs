//! Teacher repository implementation

use std::time::Instant;

use sqlx::SqlitePool;

use crate::models::teacher::{Teacher, CreateTeacherRequest, UpdateTeacherRequest};
use crate::utils::errors::AcademyError;
use crate::utils::logging::log_database_operation;

#[derive(Clone)]
#[derive(Debug)]
pub struct TeacherRepository {
    pool: SqlitePool,
}

impl TeacherRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new teacher
    pub async fn create(&self, request: CreateTeacherRequest) -> Result<Teacher, AcademyError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            INSERT INTO teachers (name, monthly_salary, date_added)
            VALUES (?, ?, ?)
            RETURNING id, name, monthly_salary, date_added
            "#
        )
        .bind(request.name)
        .bind(request.monthly_salary)
        .bind(request.date_added)
        .fetch_one(&self.pool)
        .await?;

        Ok(teacher)
    }

    /// Find teacher by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>, AcademyError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "SELECT id, name, monthly_salary, date_added FROM teachers WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(teacher)
    }

    /// List all teachers ordered by name
    pub async fn list(&self) -> Result<Vec<Teacher>, AcademyError> {
        let teachers = sqlx::query_as::<_, Teacher>(
            "SELECT id, name, monthly_salary, date_added FROM teachers ORDER BY name, id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(teachers)
    }

    /// Update name and salary. Returns `None` when the teacher does not exist.
    pub async fn update(&self, id: i64, request: UpdateTeacherRequest) -> Result<Option<Teacher>, AcademyError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            UPDATE teachers
            SET name = ?, monthly_salary = ?
            WHERE id = ?
            RETURNING id, name, monthly_salary, date_added
            "#
        )
        .bind(request.name)
        .bind(request.monthly_salary)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(teacher)
    }

    /// Delete a teacher together with their salary payments
    pub async fn delete_with_payments(&self, id: i64) -> Result<bool, AcademyError> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM teacher_payments WHERE teacher_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        log_database_operation("delete_with_payments", "teachers", started.elapsed().as_millis() as u64, true);

        Ok(result.rows_affected() > 0)
    }

    /// Count total teachers
    pub async fn count(&self) -> Result<i64, AcademyError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teachers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
