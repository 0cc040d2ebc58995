//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.
//! Helpers here never receive password material.

use tracing::{info, warn};

use crate::domain::error_log::ErrorLog;
use crate::domain::validation::ValidationErrors;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and output format
    pub fn initialize(level: &str, format: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(std::io::stderr);

        let result = if format.eq_ignore_ascii_case("json") {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| {
            crate::shared::error::AppError::Internal(format!("Failed to initialize logging: {}", e))
        })
    }

    /// Log an accepted registration
    pub fn log_registration_accepted(email: &str) {
        info!(email = %email, "Registration submission accepted");
    }

    /// Log a rejected registration with one event per field error
    pub fn log_registration_rejected(email: &str, errors: &ValidationErrors) {
        warn!(
            email = %email,
            error_count = errors.len(),
            "Registration submission rejected"
        );
        for error in errors.iter() {
            tracing::debug!(
                field = %error.field,
                kind = ?error.kind,
                message = %error.message,
                "Field rule violated"
            );
        }
    }

    /// Log a failed login attempt
    pub fn log_login_failure(email: &str, reason: &str) {
        warn!(email = %email, reason = %reason, "Login rejected");
    }

    /// Emit an error-log record
    pub fn log_error_record(record: &ErrorLog) {
        warn!(
            code = %record.code(),
            created_at = %record.created_at().to_rfc3339(),
            "{}",
            record.message()
        );
    }
}
