//! Registration validation and the register-account use case

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::ports::AccountStore;
use crate::domain::account::{AccountSubmission, Field};
use crate::domain::policy::RegistrationPolicy;
use crate::domain::validation::{
    check_field, FieldError, FieldValue, RuleRegistry, ValidationErrors,
};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

/// Validates account submissions against the registration rule table
#[derive(Debug, Clone)]
pub struct RegistrationValidator {
    policy: RegistrationPolicy,
    registry: RuleRegistry,
}

impl RegistrationValidator {
    /// Create a validator for a policy
    pub fn new(policy: RegistrationPolicy) -> AppResult<Self> {
        if policy.uses_observed_age_bounds() {
            warn!(
                age_min = policy.age_min,
                age_max = policy.age_max,
                "Registration age bounds reject most real ages - confirm with product"
            );
        }
        let registry = RuleRegistry::from_policy(&policy)?;
        Ok(Self { policy, registry })
    }

    /// Validator with the published institutional rules
    pub fn with_default_policy() -> AppResult<Self> {
        Self::new(RegistrationPolicy::default())
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Validate a submission, returning it unchanged or every violation found
    pub fn validate(&self, submission: AccountSubmission) -> Result<AccountSubmission, ValidationErrors> {
        let errors = self.check(&submission);
        if errors.is_empty() {
            LoggingUtils::log_registration_accepted(&submission.email);
        } else {
            LoggingUtils::log_registration_rejected(&submission.email, &errors);
        }
        errors.into_result(submission)
    }

    /// Collect every violation in field declaration order, cross-field checks last
    pub fn check(&self, submission: &AccountSubmission) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for rule in self.registry.iter() {
            let value = match submission.text(rule.field) {
                Some(text) => FieldValue::Text(text),
                None => FieldValue::Integer(submission.age),
            };
            errors.extend(check_field(rule, value));
        }

        if self.policy.email_matches_control_number {
            let local_part = submission.email.split('@').next().unwrap_or_default();
            if !submission.email.is_empty() && local_part != submission.control_number {
                errors.push(FieldError::mismatch(
                    Field::Email,
                    "Email must start with your control number",
                ));
            }
        }

        if submission.password != submission.password_confirmation {
            errors.push(FieldError::mismatch(
                Field::PasswordConfirmation,
                "Passwords do not match",
            ));
        }

        debug!(error_count = errors.len(), "Registration checks complete");
        errors
    }

    /// Check a single field value in isolation
    pub fn check_value(&self, field: Field, value: FieldValue<'_>) -> Vec<FieldError> {
        self.registry
            .get(field)
            .map(|rule| check_field(rule, value))
            .unwrap_or_default()
    }
}

/// Why a registration did not complete
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Registration rejected: {0}")]
    Rejected(ValidationErrors),

    #[error(transparent)]
    Storage(#[from] AppError),
}

/// Validate a submission and hand accepted accounts to the store
pub struct RegisterAccountUseCase<S> {
    validator: Arc<RegistrationValidator>,
    store: S,
}

impl<S: AccountStore> RegisterAccountUseCase<S> {
    pub fn new(validator: Arc<RegistrationValidator>, store: S) -> Self {
        Self { validator, store }
    }

    /// Execute the registration
    pub fn execute(&self, submission: AccountSubmission) -> Result<AccountSubmission, RegistrationError> {
        let account = self
            .validator
            .validate(submission)
            .map_err(RegistrationError::Rejected)?;
        self.store.store(&account)?;
        Ok(account)
    }
}
