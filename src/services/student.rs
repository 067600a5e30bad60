//! Student service implementation
//!
//! This service validates student and fee-payment forms, keeps the fee ledger
//! and computes every student's balance.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::AcademyConfig;
use crate::database::DatabaseService;
use crate::models::{
    Balance, CreateStudentPaymentRequest, CreateStudentRequest, Student, StudentForm, StudentPayment,
    StudentPaymentForm, StudentStatement, StudentSummary, UpdateStudentRequest,
};
use crate::utils::errors::{AcademyError, Result};
use crate::utils::helpers::{parse_amount, require_text};
use crate::utils::logging::{log_admin_action, log_payment_recorded};

/// Validated student fields shared by add and edit
struct StudentDetails {
    name: String,
    class_name: String,
    monthly_fee: f64,
}

/// Student service for managing students and their fee payments
#[derive(Clone)]
pub struct StudentService {
    database: DatabaseService,
    academy: AcademyConfig,
}

impl StudentService {
    pub fn new(database: DatabaseService, academy: AcademyConfig) -> Self {
        Self { database, academy }
    }

    /// Enroll a new student; enrollment date is `today`
    pub async fn add_student(&self, form: &StudentForm, today: NaiveDate) -> Result<Student> {
        let details = self.validate_student(form)?;

        let student = self
            .database
            .students
            .create(CreateStudentRequest {
                name: details.name,
                class_name: details.class_name,
                monthly_fee: details.monthly_fee,
                date_added: today,
            })
            .await?;

        log_admin_action("add", "student", Some(student.id), Some(&student.name));
        Ok(student)
    }

    /// Change a student's name, class and fee. The enrollment date is kept.
    pub async fn edit_student(&self, student_id: i64, form: &StudentForm) -> Result<Student> {
        let details = self.validate_student(form)?;

        let student = self
            .database
            .students
            .update(
                student_id,
                UpdateStudentRequest {
                    name: details.name,
                    class_name: details.class_name,
                    monthly_fee: details.monthly_fee,
                },
            )
            .await?
            .ok_or(AcademyError::StudentNotFound { student_id })?;

        log_admin_action("edit", "student", Some(student_id), Some(&student.name));
        Ok(student)
    }

    /// Remove a student and all of their payments
    pub async fn delete_student(&self, student_id: i64) -> Result<()> {
        if !self.database.students.delete_with_payments(student_id).await? {
            return Err(AcademyError::StudentNotFound { student_id });
        }

        log_admin_action("delete", "student", Some(student_id), None);
        Ok(())
    }

    /// Record a fee payment dated `today` and credited to the submitted month-year
    pub async fn record_payment(&self, student_id: i64, form: &StudentPaymentForm, today: NaiveDate) -> Result<StudentPayment> {
        let amount = parse_amount("Amount", &form.amount)?;
        let payment_method = require_text("Payment method", &form.payment_method)?;
        let month_year = require_text("Month", &form.month_year)?;

        self.require_student(student_id).await?;

        let payment = self
            .database
            .student_payments
            .create(CreateStudentPaymentRequest {
                student_id,
                amount,
                payment_method,
                payment_date: today,
                month_year,
            })
            .await?;

        log_payment_recorded("student", student_id, payment.amount, &payment.month_year);
        Ok(payment)
    }

    /// Students ordered by name with their balances as of `today`
    pub async fn list_summaries(&self, class_filter: Option<&str>, today: NaiveDate) -> Result<Vec<StudentSummary>> {
        debug!(class_filter = ?class_filter, "Listing student summaries");

        let students = self.database.students.list(class_filter).await?;
        let mut summaries = Vec::with_capacity(students.len());

        for student in students {
            let balance = self.balance(&student, today).await?;
            summaries.push(StudentSummary::new(student, balance));
        }

        Ok(summaries)
    }

    /// Balance of one student as of `today`
    pub async fn balance(&self, student: &Student, today: NaiveDate) -> Result<Balance> {
        let total_paid = self.database.student_payments.total_for_student(student.id).await?;
        Ok(Balance::compute(student.monthly_fee, student.date_added, total_paid, today))
    }

    /// Student record with payment history, for receipts
    pub async fn statement(&self, student_id: i64) -> Result<StudentStatement> {
        let student = self.require_student(student_id).await?;
        let payments = self.database.student_payments.list_for_student(student_id).await?;
        let total_paid = self.database.student_payments.total_for_student(student_id).await?;

        Ok(StudentStatement { student, payments, total_paid })
    }

    /// Configured class labels in display order
    pub fn classes(&self) -> &[String] {
        &self.academy.classes
    }

    async fn require_student(&self, student_id: i64) -> Result<Student> {
        self.database
            .students
            .find_by_id(student_id)
            .await?
            .ok_or(AcademyError::StudentNotFound { student_id })
    }

    fn validate_student(&self, form: &StudentForm) -> Result<StudentDetails> {
        let name = require_text("Name", &form.name)?;
        let class_name = require_text("Class", &form.class)?;
        let monthly_fee = parse_amount("Monthly fee", &form.monthly_fee)?;

        if !self.academy.classes.iter().any(|c| c == &class_name) {
            return Err(AcademyError::InvalidInput(format!("Unknown class: {}", class_name)));
        }

        Ok(StudentDetails { name, class_name, monthly_fee })
    }
}
