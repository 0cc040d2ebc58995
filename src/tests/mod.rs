//! Test suite for the account validation core
//!
//! This module provides:
//! - Unit tests for the registration and login rules
//! - Integration tests for the register-account flow and configuration
//! - Security tests for information leakage
//! - Shared fixtures and test doubles

pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use crate::domain::policy::RegistrationPolicy;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            // Initialize tracing for tests
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        AppConfig::default()
    }

    /// Policy with a realistic age range, everything else as published
    pub fn adult_policy() -> RegistrationPolicy {
        RegistrationPolicy {
            age_min: 15,
            age_max: 99,
            ..Default::default()
        }
    }
}

/// Test result types
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert_eq!(test_config.registration.email_domain, "utez.edu.mx");
        assert!(test_config.validate_config().is_ok());
    }

    #[test]
    fn test_adult_policy_keeps_published_rules() {
        let policy = config::adult_policy();
        assert_eq!(policy.age_max, 99);
        assert!(policy.confirmation_requires_uppercase);
        assert!(!policy.uses_observed_age_bounds());
    }
}
