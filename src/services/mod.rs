//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod receipt;
pub mod report;
pub mod student;
pub mod teacher;

// Re-export commonly used services
pub use auth::{AuthService, SessionClaims};
pub use receipt::{ReceiptService, ReceiptLayout, TextLine, FontStyle};
pub use report::ReportService;
pub use student::StudentService;
pub use teacher::TeacherService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub student_service: StudentService,
    pub teacher_service: TeacherService,
    pub auth_service: AuthService,
    pub receipt_service: ReceiptService,
    pub report_service: ReportService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, database: DatabaseService) -> Self {
        Self {
            student_service: StudentService::new(database.clone(), settings.academy.clone()),
            teacher_service: TeacherService::new(database.clone()),
            auth_service: AuthService::new(settings.auth.clone()),
            receipt_service: ReceiptService::new(settings.academy.clone()),
            report_service: ReportService::new(database, settings.academy.clone()),
        }
    }
}
