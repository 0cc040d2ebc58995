//! Login validation
//!
//! Structural checks happen before the authenticator is consulted. Any
//! authentication failure collapses into one generic error so callers
//! cannot tell an unknown email from a wrong password.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::application::ports::Authenticator;
use crate::domain::account::{Credential, Field};
use crate::shared::logging::LoggingUtils;

/// Login rejection reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthError {
    #[error("{field} is required")]
    MissingField { field: Field },

    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Validates credentials by delegating to an injected authenticator
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginValidator;

impl LoginValidator {
    pub fn new() -> Self {
        Self
    }

    /// Authenticate a credential, calling `authenticator` at most once
    pub fn validate<A>(&self, credential: &Credential, authenticator: &A) -> Result<A::Identity, AuthError>
    where
        A: Authenticator + ?Sized,
    {
        // Whitespace-only input counts as absent; the raw values still go to the authenticator
        if credential.email.trim().is_empty() {
            return Err(AuthError::MissingField { field: Field::Email });
        }
        if credential.password.trim().is_empty() {
            return Err(AuthError::MissingField { field: Field::Password });
        }

        match authenticator.authenticate(&credential.email, &credential.password) {
            Some(identity) => {
                debug!(email = %credential.email, "Credential authenticated");
                Ok(identity)
            }
            None => {
                LoggingUtils::log_login_failure(&credential.email, "invalid credentials");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
