//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod ledger;
pub mod student;
pub mod teacher;
pub mod report;

// Re-export commonly used models
pub use ledger::Balance;
pub use student::{
    Student, StudentPayment, CreateStudentRequest, UpdateStudentRequest, CreateStudentPaymentRequest,
    StudentForm, StudentPaymentForm, StudentSummary, StudentStatement,
};
pub use teacher::{
    Teacher, TeacherPayment, CreateTeacherRequest, UpdateTeacherRequest, CreateTeacherPaymentRequest,
    TeacherForm, TeacherPaymentForm, TeacherSummary, TeacherStatement,
};
pub use report::{DashboardStats, ClassSummary};
