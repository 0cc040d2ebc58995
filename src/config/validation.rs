//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::AppConfig;
use crate::domain::policy::RegistrationPolicy;
use crate::shared::error::AppError;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_registration_policy(&config.registration)?;
        Self::validate_logging_format(&config.logging.format)?;

        Ok(())
    }

    /// Validate cross-field registration policy settings
    fn validate_registration_policy(policy: &RegistrationPolicy) -> crate::Result<()> {
        if policy.age_min > policy.age_max {
            return Err(AppError::Validation(format!(
                "age_min ({}) cannot be greater than age_max ({})",
                policy.age_min, policy.age_max
            )));
        }

        if policy.password_min_length > policy.password_max_length {
            return Err(AppError::Validation(
                "password_min_length cannot be greater than password_max_length".to_string()
            ));
        }

        if policy.email_domain.contains('@') || !policy.email_domain.contains('.') {
            return Err(AppError::Validation(
                format!("Invalid email domain: {}", policy.email_domain)
            ));
        }

        if policy.password_symbols.chars().any(|c| c.is_alphanumeric() || c.is_whitespace()) {
            return Err(AppError::Validation(
                "password_symbols must contain symbols only".to_string()
            ));
        }

        Ok(())
    }

    fn validate_logging_format(format: &str) -> crate::Result<()> {
        if !["text", "json"].contains(&format.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(
                format!("Invalid log format: {}", format)
            ));
        }

        Ok(())
    }
}
