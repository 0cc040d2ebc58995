//! Error-log record
//!
//! A timestamped `{code, message}` entry. The timestamp is fixed when the
//! record is created and has no setter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ErrorLog {
    #[validate(length(min = 1, max = 10))]
    code: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl ErrorLog {
    /// Create a record stamped with the current time
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> AppResult<Self> {
        Self::at(code, message, Utc::now())
    }

    /// Create a record with an explicit creation time
    pub fn at(
        code: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let record = Self {
            code: code.into(),
            message: message.into(),
            created_at,
        };
        record
            .validate()
            .map_err(|e| AppError::Validation(format!("Invalid error-log record: {}", e)))?;
        Ok(record)
    }

    /// Build a record from an application error
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.message)
    }
}
