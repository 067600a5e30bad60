//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;

use crate::utils::errors::{AcademyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_academy_config(&settings.academy)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(AcademyError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(AcademyError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(AcademyError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(AcademyError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(AcademyError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate administrator credential configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.username.trim().is_empty() {
        return Err(AcademyError::Config(
            "Admin username is required".to_string()
        ));
    }

    if config.password.is_empty() {
        return Err(AcademyError::Config(
            "Admin password is required".to_string()
        ));
    }

    if config.session_ttl_hours == 0 {
        return Err(AcademyError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    if config.cookie_name.is_empty() {
        return Err(AcademyError::Config(
            "Session cookie name is required".to_string()
        ));
    }

    Ok(())
}

/// Validate academy presentation settings
fn validate_academy_config(config: &super::AcademyConfig) -> Result<()> {
    if config.currency.trim().is_empty() {
        return Err(AcademyError::Config(
            "Currency label is required".to_string()
        ));
    }

    if config.classes.is_empty() {
        return Err(AcademyError::Config(
            "At least one class must be configured".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for class in &config.classes {
        if class.trim().is_empty() {
            return Err(AcademyError::Config(
                "Class labels cannot be blank".to_string()
            ));
        }
        if !seen.insert(class.as_str()) {
            return Err(AcademyError::Config(
                format!("Duplicate class label: {}", class)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AcademyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AcademyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
