//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod student;
pub mod student_payment;
pub mod teacher;
pub mod teacher_payment;

// Re-export repositories
pub use student::StudentRepository;
pub use student_payment::StudentPaymentRepository;
pub use teacher::TeacherRepository;
pub use teacher_payment::TeacherPaymentRepository;
