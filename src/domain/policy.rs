//! Registration policy
//!
//! Every tunable business constant of the registration rule set lives here.
//! The defaults reproduce the rules the institution currently publishes,
//! including two that look wrong (see `OBSERVED_AGE_MAX` and
//! `confirmation_requires_uppercase`); they stay as published until product
//! confirms a correction, and can be overridden through configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Institutional email domain
pub const INSTITUTIONAL_DOMAIN: &str = "utez.edu.mx";

/// Symbols accepted as the mandatory password symbol
pub const PASSWORD_SYMBOLS: &str = "!#$%&?";

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 50;

/// Published lower age bound
pub const OBSERVED_AGE_MIN: i64 = 1;

/// Published upper age bound. Rejects every realistic adult age.
pub const OBSERVED_AGE_MAX: i64 = 2;

/// Characters in `00000tn000`
pub const CONTROL_NUMBER_LENGTH: usize = 10;

pub const PHONE_LENGTH: usize = 10;

/// Tunable registration rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationPolicy {
    /// Domain every institutional email must use
    #[validate(length(min = 3, max = 200))]
    pub email_domain: String,

    /// Accepted password symbols
    #[validate(length(min = 1, max = 64))]
    pub password_symbols: String,

    #[validate(range(min = 1, max = 128))]
    pub password_min_length: usize,

    #[validate(range(min = 1, max = 1024))]
    pub password_max_length: usize,

    #[validate(range(min = 0, max = 200))]
    pub age_min: i64,

    #[validate(range(min = 0, max = 200))]
    pub age_max: i64,

    /// Confirmation field must also contain an uppercase letter
    pub confirmation_requires_uppercase: bool,

    /// Email local part must equal the control number
    pub email_matches_control_number: bool,
}

impl RegistrationPolicy {
    /// Exact length of a valid institutional email for this domain
    pub fn email_length(&self) -> usize {
        CONTROL_NUMBER_LENGTH + 1 + self.email_domain.chars().count()
    }

    /// Whether the published (suspicious) age bounds are in effect
    pub fn uses_observed_age_bounds(&self) -> bool {
        self.age_min == OBSERVED_AGE_MIN && self.age_max == OBSERVED_AGE_MAX
    }
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            email_domain: INSTITUTIONAL_DOMAIN.to_string(),
            password_symbols: PASSWORD_SYMBOLS.to_string(),
            password_min_length: PASSWORD_MIN_LENGTH,
            password_max_length: PASSWORD_MAX_LENGTH,
            age_min: OBSERVED_AGE_MIN,
            age_max: OBSERVED_AGE_MAX,
            confirmation_requires_uppercase: true,
            email_matches_control_number: false,
        }
    }
}
