//! Teacher model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ledger::Balance;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub monthly_salary: f64,
    pub date_added: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeacherPayment {
    pub id: i64,
    pub teacher_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub month_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub monthly_salary: f64,
    pub date_added: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeacherRequest {
    pub name: String,
    pub monthly_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeacherPaymentRequest {
    pub teacher_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub month_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeacherForm {
    pub name: String,
    pub monthly_salary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeacherPaymentForm {
    pub amount: String,
    pub month_year: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherSummary {
    pub id: i64,
    pub name: String,
    pub monthly_salary: f64,
    pub date_added: NaiveDate,
    #[serde(flatten)]
    pub balance: Balance,
}

impl TeacherSummary {
    pub fn new(teacher: Teacher, balance: Balance) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            monthly_salary: teacher.monthly_salary,
            date_added: teacher.date_added,
            balance,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherStatement {
    pub teacher: Teacher,
    pub payments: Vec<TeacherPayment>,
    pub total_paid: f64,
}
