//! UTEZ Accounts - Registration and login validation for institutional accounts
//!
//! This library checks account submissions against the institutional rule set
//! (email, control number, phone, password policy) and validates login
//! credentials through an injected authenticator. Storage and identity lookup
//! are left to the caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::{
    AccountStore, AuthError, Authenticator, LoginValidator, RegisterAccountUseCase,
    RegistrationError, RegistrationValidator,
};
pub use config::AppConfig;
pub use domain::{
    AccountSubmission, Credential, ErrorLog, Field, FieldError, FieldErrorKind,
    RegistrationPolicy, ValidationErrors,
};
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
