//! Domain validation module
//!
//! Registration rules as data: a table of `FieldRule`s built from a
//! `RegistrationPolicy` and one generic routine that checks any field.

pub mod checker;
pub mod errors;
pub mod registry;
pub mod types;

pub use checker::check_field;
pub use errors::{FieldError, FieldErrorKind, ValidationErrors};
pub use registry::RuleRegistry;
pub use types::{FieldRule, FieldValue, ValidationConstraint};
