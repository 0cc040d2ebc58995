//! Configuration management module
//!
//! This module handles configuration loading and validation.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, LoggingConfig};
pub use validation::ConfigValidator;
