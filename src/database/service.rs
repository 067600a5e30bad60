//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{
    DatabasePool, StudentRepository, StudentPaymentRepository, TeacherRepository, TeacherPaymentRepository,
};
use crate::models::DashboardStats;
use crate::utils::errors::AcademyError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub students: StudentRepository,
    pub student_payments: StudentPaymentRepository,
    pub teachers: TeacherRepository,
    pub teacher_payments: TeacherPaymentRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            students: StudentRepository::new(pool.clone()),
            student_payments: StudentPaymentRepository::new(pool.clone()),
            teachers: TeacherRepository::new(pool.clone()),
            teacher_payments: TeacherPaymentRepository::new(pool.clone()),
            pool,
        }
    }

    /// Headcounts and payment totals for the dashboard
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AcademyError> {
        Ok(DashboardStats {
            total_students: self.students.count().await?,
            total_teachers: self.teachers.count().await?,
            total_collected: self.student_payments.total_all().await?,
            total_salaries_paid: self.teacher_payments.total_all().await?,
        })
    }

    /// Check that the database answers queries
    pub async fn health_check(&self) -> Result<(), AcademyError> {
        super::health_check(&self.pool).await
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}
