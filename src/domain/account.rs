//! Account domain models
//!
//! Raw registration and login input as it arrives from the request layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields known to the validation core, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Name,
    Surname,
    ControlNumber,
    Age,
    Phone,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Registration fields in declaration order
    pub const REGISTRATION: [Field; 8] = [
        Field::Email,
        Field::Name,
        Field::Surname,
        Field::ControlNumber,
        Field::Age,
        Field::Phone,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "name",
            Field::Surname => "surname",
            Field::ControlNumber => "control_number",
            Field::Age => "age",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate account submitted for registration
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AccountSubmission {
    pub email: String,
    pub name: String,
    pub surname: String,
    pub control_number: String,
    pub age: i64,
    #[serde(alias = "tel")]
    pub phone: String,
    #[serde(alias = "password1")]
    pub password: String,
    #[serde(alias = "password2")]
    pub password_confirmation: String,
}

impl AccountSubmission {
    /// Text value of a field, `None` for non-text fields
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Name => Some(&self.name),
            Field::Surname => Some(&self.surname),
            Field::ControlNumber => Some(&self.control_number),
            Field::Phone => Some(&self.phone),
            Field::Password => Some(&self.password),
            Field::PasswordConfirmation => Some(&self.password_confirmation),
            Field::Age => None,
        }
    }
}

impl fmt::Debug for AccountSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountSubmission")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("control_number", &self.control_number)
            .field("age", &self.age)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}

/// Email/password pair presented at login
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
