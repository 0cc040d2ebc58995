use crate::domain::account::Field;
use crate::domain::policy::{RegistrationPolicy, CONTROL_NUMBER_LENGTH, PHONE_LENGTH};
use crate::shared::error::AppResult;
use super::types::{FieldRule, ValidationConstraint};

const CONTROL_NUMBER_BODY: &str = "[0-9]{5}tn[0-9]{3}";
const LETTERS_ONLY: &str = "^[A-Za-z]+$";

/// Registration rule table, one entry per field in declaration order
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<FieldRule>,
}

impl RuleRegistry {
    /// Build the rule table for a policy
    pub fn from_policy(policy: &RegistrationPolicy) -> AppResult<Self> {
        let symbols = symbol_class(&policy.password_symbols);
        let symbol_description = format!("one of {}", policy.password_symbols);
        let email_pattern = format!(
            "^{}@{}$",
            CONTROL_NUMBER_BODY,
            regex::escape(&policy.email_domain)
        );

        let rules = vec![
            FieldRule::new(Field::Email)
                .with(ValidationConstraint::Required)
                .with(ValidationConstraint::ExactLength(policy.email_length()))
                .with(ValidationConstraint::pattern(
                    &email_pattern,
                    format!("an institutional address like 00000tn000@{}", policy.email_domain),
                )?),
            FieldRule::new(Field::Name)
                .with(ValidationConstraint::Required)
                .with(ValidationConstraint::MinLength(1))
                .with(ValidationConstraint::MaxLength(150))
                .with(ValidationConstraint::pattern(LETTERS_ONLY, "letters only")?),
            FieldRule::new(Field::Surname)
                .with(ValidationConstraint::Required)
                .with(ValidationConstraint::MinLength(2))
                .with(ValidationConstraint::MaxLength(50))
                .with(ValidationConstraint::pattern(LETTERS_ONLY, "letters only")?),
            FieldRule::new(Field::ControlNumber)
                .with(ValidationConstraint::Required)
                .with(ValidationConstraint::ExactLength(CONTROL_NUMBER_LENGTH))
                .with(ValidationConstraint::pattern(
                    &format!("^{}$", CONTROL_NUMBER_BODY),
                    "the format 00000tn000",
                )?),
            FieldRule::new(Field::Age)
                .with(ValidationConstraint::MinValue(policy.age_min))
                .with(ValidationConstraint::MaxValue(policy.age_max)),
            FieldRule::new(Field::Phone)
                .with(ValidationConstraint::Required)
                .with(ValidationConstraint::ExactLength(PHONE_LENGTH))
                .with(ValidationConstraint::pattern(
                    &format!("^[0-9]{{{}}}$", PHONE_LENGTH),
                    "digits only",
                )?),
            password_rule(Field::Password, policy, &symbols, &symbol_description)?,
            {
                let rule = password_rule(
                    Field::PasswordConfirmation,
                    policy,
                    &symbols,
                    &symbol_description,
                )?;
                if policy.confirmation_requires_uppercase {
                    rule.with(ValidationConstraint::contains("[A-Z]", "an uppercase letter")?)
                } else {
                    rule
                }
            },
        ];

        Ok(Self { rules })
    }

    /// Rule for a field
    pub fn get(&self, field: Field) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// All rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }
}

fn password_rule(
    field: Field,
    policy: &RegistrationPolicy,
    symbols: &str,
    symbol_description: &str,
) -> AppResult<FieldRule> {
    Ok(FieldRule::new(field)
        .with(ValidationConstraint::Required)
        .with(ValidationConstraint::MinLength(policy.password_min_length))
        .with(ValidationConstraint::MaxLength(policy.password_max_length))
        .with(ValidationConstraint::contains("[0-9]", "a digit")?)
        .with(ValidationConstraint::contains(symbols, symbol_description)?))
}

/// Character class matching any of `symbols`, each escaped
fn symbol_class(symbols: &str) -> String {
    let escaped: String = symbols
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
        .collect();
    format!("[{}]", escaped)
}
