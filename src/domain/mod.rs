//! Domain layer - Core business rules and domain models
//!
//! This module contains the account models, the registration rule table and
//! the error-log record. Nothing here performs I/O.

pub mod account;
pub mod error_log;
pub mod policy;
pub mod validation;

pub use account::{AccountSubmission, Credential, Field};
pub use error_log::ErrorLog;
pub use policy::RegistrationPolicy;
pub use validation::{
    FieldError, FieldErrorKind, FieldRule, RuleRegistry, ValidationConstraint, ValidationErrors,
};
