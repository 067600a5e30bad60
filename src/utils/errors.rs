//! Error handling for Academy Ledger
//!
//! This module defines the main error type used throughout the application
//! and how each variant is surfaced to HTTP clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the academy application
#[derive(Error, Debug)]
pub enum AcademyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Receipt rendering error: {0}")]
    Render(#[from] printpdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session token error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: i64 },

    #[error("Teacher not found: {teacher_id}")]
    TeacherNotFound { teacher_id: i64 },
}

/// Result type alias for academy operations
pub type Result<T> = std::result::Result<T, AcademyError>;

impl From<config::ConfigError> for AcademyError {
    fn from(err: config::ConfigError) -> Self {
        AcademyError::Config(err.to_string())
    }
}

impl AcademyError {
    /// HTTP status reported to the client
    pub fn status_code(&self) -> StatusCode {
        match self {
            AcademyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AcademyError::Authentication(_) | AcademyError::Session(_) => StatusCode::UNAUTHORIZED,
            AcademyError::StudentNotFound { .. } | AcademyError::TeacherNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AcademyError::Database(_) => ErrorSeverity::Critical,
            AcademyError::Migration(_) => ErrorSeverity::Critical,
            AcademyError::Config(_) => ErrorSeverity::Critical,
            AcademyError::Authentication(_) => ErrorSeverity::Warning,
            AcademyError::Session(_) => ErrorSeverity::Warning,
            AcademyError::InvalidInput(_) => ErrorSeverity::Info,
            AcademyError::StudentNotFound { .. } => ErrorSeverity::Info,
            AcademyError::TeacherNotFound { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Message safe to show to the client.
    ///
    /// Server-side failures are reported generically; the detail goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            AcademyError::Authentication(message) => message.clone(),
            _ if self.status_code().is_server_error() => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AcademyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self.severity() {
            ErrorSeverity::Critical | ErrorSeverity::Error => {
                tracing::error!(error = %self, severity = %self.severity(), "Request failed");
            }
            ErrorSeverity::Warning => tracing::warn!(error = %self, "Request rejected"),
            ErrorSeverity::Info => tracing::debug!(error = %self, "Request rejected"),
        }

        let body = json!({
            "success": false,
            "message": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AcademyError::InvalidInput("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AcademyError::StudentNotFound { student_id: 4 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AcademyError::TeacherNotFound { teacher_id: 4 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AcademyError::Authentication("nope".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AcademyError::Config("broken".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_internal_detail() {
        let err = AcademyError::Config("secret path /etc/x".to_string());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AcademyError::InvalidInput("Amount must be a number".to_string());
        assert_eq!(err.public_message(), "Invalid input: Amount must be a number");

        let err = AcademyError::Authentication("Invalid credentials".to_string());
        assert_eq!(err.public_message(), "Invalid credentials");
    }

    #[test]
    fn test_severity() {
        assert_eq!(AcademyError::Config(String::new()).severity(), ErrorSeverity::Critical);
        assert_eq!(AcademyError::InvalidInput(String::new()).severity(), ErrorSeverity::Info);
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
