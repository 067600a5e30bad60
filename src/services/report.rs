//! Report service implementation
//!
//! Aggregates fee collection per class and the dashboard headline figures.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::AcademyConfig;
use crate::database::DatabaseService;
use crate::models::{Balance, ClassSummary, DashboardStats};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct ReportService {
    database: DatabaseService,
    academy: AcademyConfig,
}

impl ReportService {
    pub fn new(database: DatabaseService, academy: AcademyConfig) -> Self {
        Self { database, academy }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats> {
        self.database.dashboard_stats().await
    }

    /// Collected and pending fees for every configured class that has students,
    /// in configured order
    pub async fn class_summaries(&self, today: NaiveDate) -> Result<Vec<ClassSummary>> {
        let mut summaries = Vec::new();

        for class_name in &self.academy.classes {
            let students = self.database.students.list_by_class(class_name).await?;
            if students.is_empty() {
                continue;
            }

            let mut collected = 0.0;
            let mut pending = 0.0;
            for student in &students {
                let paid = self.database.student_payments.total_for_student(student.id).await?;
                let balance = Balance::compute(student.monthly_fee, student.date_added, paid, today);
                collected += paid;
                pending += balance.pending_amount;
            }

            debug!(class = %class_name, students = students.len(), "Class summary computed");
            summaries.push(ClassSummary {
                class_name: class_name.clone(),
                students: students.len() as i64,
                collected,
                pending,
            });
        }

        Ok(summaries)
    }
}
