use regex::Regex;

use crate::domain::account::Field;

/// Rule applied to one field: an ordered list of constraints
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub constraints: Vec<ValidationConstraint>,
}

impl FieldRule {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            constraints: Vec::new(),
        }
    }

    /// Append a constraint, builder style
    pub fn with(mut self, constraint: ValidationConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// Validation constraints
///
/// Text constraints measure length in characters. `Contains` stands in for a
/// lookahead: the class must match somewhere in the value.
#[derive(Debug, Clone)]
pub enum ValidationConstraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    ExactLength(usize),
    Pattern { regex: Regex, description: String },
    Contains { class: Regex, description: String },
    MinValue(i64),
    MaxValue(i64),
}

impl ValidationConstraint {
    /// Anchored pattern constraint
    pub fn pattern(pattern: &str, description: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(ValidationConstraint::Pattern {
            regex: Regex::new(pattern)?,
            description: description.into(),
        })
    }

    /// "Must contain at least one of" constraint
    pub fn contains(class: &str, description: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(ValidationConstraint::Contains {
            class: Regex::new(class)?,
            description: description.into(),
        })
    }
}

/// Value handed to the generic field checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
}
