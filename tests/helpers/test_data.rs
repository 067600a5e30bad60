//! Test data helpers
//!
//! Seeds rosters directly through the repositories when a test needs
//! records with a back-dated `date_added`.

use chrono::{Datelike, Months, NaiveDate};
use fake::faker::name::en::Name;
use fake::Fake;

use academy_ledger::models::{
    CreateStudentPaymentRequest, CreateStudentRequest, CreateTeacherRequest, Student, Teacher,
};
use academy_ledger::utils::helpers::today;

use super::TestApp;

pub fn fake_name() -> String {
    Name().fake()
}

/// First of the month `months_back` calendar months before today
pub fn months_ago(months_back: u32) -> NaiveDate {
    let first = today().with_day(1).expect("first of month");
    first - Months::new(months_back)
}

pub async fn seed_student(app: &TestApp, name: &str, class_name: &str, monthly_fee: f64, date_added: NaiveDate) -> Student {
    app.state
        .database
        .students
        .create(CreateStudentRequest {
            name: name.to_string(),
            class_name: class_name.to_string(),
            monthly_fee,
            date_added,
        })
        .await
        .expect("seed student")
}

pub async fn seed_student_payment(app: &TestApp, student_id: i64, amount: f64, month_year: &str) {
    app.state
        .database
        .student_payments
        .create(CreateStudentPaymentRequest {
            student_id,
            amount,
            payment_method: "Cash".to_string(),
            payment_date: today(),
            month_year: month_year.to_string(),
        })
        .await
        .expect("seed student payment");
}

pub async fn seed_teacher(app: &TestApp, name: &str, monthly_salary: f64, date_added: NaiveDate) -> Teacher {
    app.state
        .database
        .teachers
        .create(CreateTeacherRequest {
            name: name.to_string(),
            monthly_salary,
            date_added,
        })
        .await
        .expect("seed teacher")
}

pub async fn count_rows(app: &TestApp, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&app.pool)
        .await
        .expect("count rows");
    count
}
