//! Teacher service implementation
//!
//! Salary counterpart of the student service: teachers accrue their monthly
//! salary from the hire date and are credited with each salary payment.

use chrono::NaiveDate;
use tracing::debug;

use crate::database::DatabaseService;
use crate::models::{
    Balance, CreateTeacherPaymentRequest, CreateTeacherRequest, Teacher, TeacherForm, TeacherPayment,
    TeacherPaymentForm, TeacherStatement, TeacherSummary, UpdateTeacherRequest,
};
use crate::utils::errors::{AcademyError, Result};
use crate::utils::helpers::{parse_amount, require_text};
use crate::utils::logging::{log_admin_action, log_payment_recorded};

#[derive(Clone)]
pub struct TeacherService {
    database: DatabaseService,
}

impl TeacherService {
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }

    /// Hire a new teacher; hire date is `today`
    pub async fn add_teacher(&self, form: &TeacherForm, today: NaiveDate) -> Result<Teacher> {
        let (name, monthly_salary) = Self::validate_teacher(form)?;

        let teacher = self
            .database
            .teachers
            .create(CreateTeacherRequest { name, monthly_salary, date_added: today })
            .await?;

        log_admin_action("add", "teacher", Some(teacher.id), Some(&teacher.name));
        Ok(teacher)
    }

    pub async fn edit_teacher(&self, teacher_id: i64, form: &TeacherForm) -> Result<Teacher> {
        let (name, monthly_salary) = Self::validate_teacher(form)?;

        let teacher = self
            .database
            .teachers
            .update(teacher_id, UpdateTeacherRequest { name, monthly_salary })
            .await?
            .ok_or(AcademyError::TeacherNotFound { teacher_id })?;

        log_admin_action("edit", "teacher", Some(teacher_id), Some(&teacher.name));
        Ok(teacher)
    }

    /// Remove a teacher and all of their salary payments
    pub async fn delete_teacher(&self, teacher_id: i64) -> Result<()> {
        if !self.database.teachers.delete_with_payments(teacher_id).await? {
            return Err(AcademyError::TeacherNotFound { teacher_id });
        }

        log_admin_action("delete", "teacher", Some(teacher_id), None);
        Ok(())
    }

    pub async fn record_payment(&self, teacher_id: i64, form: &TeacherPaymentForm, today: NaiveDate) -> Result<TeacherPayment> {
        let amount = parse_amount("Amount", &form.amount)?;
        let month_year = require_text("Month", &form.month_year)?;

        self.require_teacher(teacher_id).await?;

        let payment = self
            .database
            .teacher_payments
            .create(CreateTeacherPaymentRequest {
                teacher_id,
                amount,
                payment_date: today,
                month_year,
            })
            .await?;

        log_payment_recorded("teacher", teacher_id, payment.amount, &payment.month_year);
        Ok(payment)
    }

    /// Teachers ordered by name with their salary balances as of `today`
    pub async fn list_summaries(&self, today: NaiveDate) -> Result<Vec<TeacherSummary>> {
        debug!("Listing teacher summaries");

        let teachers = self.database.teachers.list().await?;
        let mut summaries = Vec::with_capacity(teachers.len());

        for teacher in teachers {
            let total_paid = self.database.teacher_payments.total_for_teacher(teacher.id).await?;
            let balance = Balance::compute(teacher.monthly_salary, teacher.date_added, total_paid, today);
            summaries.push(TeacherSummary::new(teacher, balance));
        }

        Ok(summaries)
    }

    pub async fn statement(&self, teacher_id: i64) -> Result<TeacherStatement> {
        let teacher = self.require_teacher(teacher_id).await?;
        let payments = self.database.teacher_payments.list_for_teacher(teacher_id).await?;
        let total_paid = self.database.teacher_payments.total_for_teacher(teacher_id).await?;

        Ok(TeacherStatement { teacher, payments, total_paid })
    }

    async fn require_teacher(&self, teacher_id: i64) -> Result<Teacher> {
        self.database
            .teachers
            .find_by_id(teacher_id)
            .await?
            .ok_or(AcademyError::TeacherNotFound { teacher_id })
    }

    fn validate_teacher(form: &TeacherForm) -> Result<(String, f64)> {
        let name = require_text("Name", &form.name)?;
        let monthly_salary = parse_amount("Monthly salary", &form.monthly_salary)?;
        Ok((name, monthly_salary))
    }
}
