//! Aggregate views for the dashboard and reports pages

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_collected: f64,
    pub total_salaries_paid: f64,
}

/// Fee totals for one class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    #[serde(rename = "class")]
    pub class_name: String,
    pub students: i64,
    pub collected: f64,
    pub pending: f64,
}
