//! Generic field checker
//!
//! Applies a `FieldRule` to a single value and reports every violated
//! constraint. An empty value under `Required` reports `Missing` only.

use super::errors::FieldError;
use super::types::{FieldRule, FieldValue, ValidationConstraint};

/// Check one value against its rule
pub fn check_field(rule: &FieldRule, value: FieldValue<'_>) -> Vec<FieldError> {
    if let FieldValue::Text(text) = value {
        let required = rule
            .constraints
            .iter()
            .any(|c| matches!(c, ValidationConstraint::Required));
        if required && text.is_empty() {
            return vec![FieldError::missing(rule.field)];
        }
    }

    rule.constraints
        .iter()
        .filter_map(|constraint| apply_constraint(constraint, value))
        .map(|message| FieldError::format(rule.field, message))
        .collect()
}

/// Apply validation constraint, returning the violation message if any
fn apply_constraint(constraint: &ValidationConstraint, value: FieldValue<'_>) -> Option<String> {
    match (constraint, value) {
        (ValidationConstraint::Required, _) => None,
        (ValidationConstraint::MinLength(min_len), FieldValue::Text(s)) => {
            (s.chars().count() < *min_len)
                .then(|| format!("Must be at least {} characters long", min_len))
        }
        (ValidationConstraint::MaxLength(max_len), FieldValue::Text(s)) => {
            (s.chars().count() > *max_len)
                .then(|| format!("Must be at most {} characters long", max_len))
        }
        (ValidationConstraint::ExactLength(len), FieldValue::Text(s)) => {
            (s.chars().count() != *len)
                .then(|| format!("Must be exactly {} characters long", len))
        }
        (ValidationConstraint::Pattern { regex, description }, FieldValue::Text(s)) => {
            (!regex.is_match(s)).then(|| format!("Must be {}", description))
        }
        (ValidationConstraint::Contains { class, description }, FieldValue::Text(s)) => {
            (!class.is_match(s)).then(|| format!("Must contain {}", description))
        }
        (ValidationConstraint::MinValue(min), FieldValue::Integer(n)) => {
            (n < *min).then(|| format!("Must be at least {}", min))
        }
        (ValidationConstraint::MaxValue(max), FieldValue::Integer(n)) => {
            (n > *max).then(|| format!("Must be at most {}", max))
        }
        // Text constraints never apply to numbers and vice versa
        _ => None,
    }
}
