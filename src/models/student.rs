//! Student model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ledger::Balance;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "class")]
    #[serde(rename = "class")]
    pub class_name: String,
    pub monthly_fee: f64,
    pub date_added: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentPayment {
    pub id: i64,
    pub student_id: i64,
    pub amount: f64,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub month_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub class_name: String,
    pub monthly_fee: f64,
    pub date_added: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub class_name: String,
    pub monthly_fee: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentPaymentRequest {
    pub student_id: i64,
    pub amount: f64,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub month_year: String,
}

/// Add/edit form as submitted by the students page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    pub class: String,
    pub monthly_fee: String,
}

/// Fee payment form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentPaymentForm {
    pub amount: String,
    pub payment_method: String,
    pub month_year: String,
}

/// One row of the students page
#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub monthly_fee: f64,
    pub date_added: NaiveDate,
    #[serde(flatten)]
    pub balance: Balance,
}

impl StudentSummary {
    pub fn new(student: Student, balance: Balance) -> Self {
        Self {
            id: student.id,
            name: student.name,
            class_name: student.class_name,
            monthly_fee: student.monthly_fee,
            date_added: student.date_added,
            balance,
        }
    }
}

/// A student with their full payment history, newest first
#[derive(Debug, Clone, Serialize)]
pub struct StudentStatement {
    pub student: Student,
    pub payments: Vec<StudentPayment>,
    pub total_paid: f64,
}
