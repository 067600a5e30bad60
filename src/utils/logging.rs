//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the academy application.

use std::path::Path;

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::errors::{AcademyError, Result};

/// Initialize logging based on configuration.
///
/// When a log file is configured the returned guard must be kept alive for
/// the lifetime of the process, otherwise buffered lines are dropped.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(file_path) if !file_path.is_empty() => {
            let path = Path::new(file_path);
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| AcademyError::Config(format!("Invalid log file path: {}", file_path)))?;

            let appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| AcademyError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log administrator actions
pub fn log_admin_action(action: &str, target: &str, target_id: Option<i64>, details: Option<&str>) {
    info!(
        action = action,
        target = target,
        target_id = target_id,
        details = details,
        "Admin action performed"
    );
}

/// Log a recorded fee or salary payment
pub fn log_payment_recorded(ledger: &str, owner_id: i64, amount: f64, month_year: &str) {
    info!(
        ledger = ledger,
        owner_id = owner_id,
        amount = amount,
        month_year = month_year,
        "Payment recorded"
    );
}

/// Log failed login attempts
pub fn log_failed_login(username: &str) {
    warn!(username = username, "Login rejected: invalid credentials");
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
