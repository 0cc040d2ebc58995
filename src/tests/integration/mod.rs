//! Integration tests for the account validation core
//!
//! This module covers end-to-end flows:
//! - Raw JSON input through registration into an account store
//! - Store failures after successful validation
//! - Login against a closure-based authenticator
//! - Configuration loading feeding the validator

use crate::{
    application::{
        AuthError, LoginValidator, RegisterAccountUseCase, RegistrationError,
        RegistrationValidator,
    },
    config::AppConfig,
    domain::{
        account::{AccountSubmission, Credential, Field},
        error_log::ErrorLog,
        validation::FieldErrorKind,
    },
    shared::error::AppError,
    tests::{
        common::{fixtures, InMemoryAccountStore},
        config,
        TestResult,
    },
};
use serde_json::json;
use std::cell::Cell;
use std::sync::Arc;

fn use_case(store: &InMemoryAccountStore) -> RegisterAccountUseCase<&InMemoryAccountStore> {
    config::init();
    let validator = Arc::new(RegistrationValidator::with_default_policy().expect("default policy"));
    RegisterAccountUseCase::new(validator, store)
}

#[test]
fn test_json_submission_is_registered() -> TestResult<()> {
    let raw = json!({
        "email": "20223tn045@utez.edu.mx",
        "name": "Luis",
        "surname": "Ramirez",
        "control_number": "20223tn045",
        "age": 1,
        "phone": "7779876543",
        "password": "Segura9#X",
        "password_confirmation": "Segura9#X"
    });
    let submission: AccountSubmission = serde_json::from_value(raw)?;

    let store = InMemoryAccountStore::new();
    let account = use_case(&store).execute(submission)?;

    assert_eq!(account.control_number, "20223tn045");
    assert_eq!(store.stored_emails(), vec!["20223tn045@utez.edu.mx".to_string()]);
    Ok(())
}

#[test]
fn test_rejected_submission_is_not_stored() {
    let store = InMemoryAccountStore::new();
    let mut submission = fixtures::valid_submission();
    submission.phone = "12345".to_string();
    submission.password_confirmation = "Other123!".to_string();

    match use_case(&store).execute(submission) {
        Err(RegistrationError::Rejected(errors)) => {
            assert!(errors.contains(Field::Phone, FieldErrorKind::Format));
            assert!(errors.contains(Field::PasswordConfirmation, FieldErrorKind::Mismatch));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(store.stored_emails().is_empty());
}

#[test]
fn test_store_failure_surfaces_as_storage_error() {
    let store = InMemoryAccountStore::failing();
    let result = use_case(&store).execute(fixtures::valid_submission());
    assert!(matches!(result, Err(RegistrationError::Storage(AppError::Storage(_)))));
}

#[test]
fn test_duplicate_registration_is_refused_by_store() {
    let store = InMemoryAccountStore::new();
    let use_case = use_case(&store);
    assert!(use_case.execute(fixtures::valid_submission()).is_ok());
    assert!(matches!(
        use_case.execute(fixtures::valid_submission()),
        Err(RegistrationError::Storage(_))
    ));
}

#[test]
fn test_rejection_serializes_for_display() -> TestResult<()> {
    let validator = RegistrationValidator::with_default_policy()?;
    let errors = validator
        .validate(fixtures::empty_submission())
        .expect_err("empty submission must fail");
    let body = serde_json::to_value(&errors)?;
    let list = body.as_array().ok_or("expected array")?;
    assert_eq!(list.len(), errors.len());
    assert_eq!(list[0]["field"], "email");
    assert_eq!(list[0]["kind"], "missing");
    Ok(())
}

#[test]
fn test_login_with_closure_authenticator() {
    config::init();
    let calls = Cell::new(0);
    let lookup = |email: &str, password: &str| -> Option<String> {
        calls.set(calls.get() + 1);
        (email == fixtures::EMAIL && password == fixtures::PASSWORD).then(|| "session-token".to_string())
    };
    let login = LoginValidator::new();

    let ok = login.validate(&Credential::new(fixtures::EMAIL, fixtures::PASSWORD), &lookup);
    assert_eq!(ok, Ok("session-token".to_string()));

    let bad = login.validate(&Credential::new(fixtures::EMAIL, "nope"), &lookup);
    assert_eq!(bad, Err(AuthError::InvalidCredentials));

    let missing = login.validate(&Credential::new("", ""), &lookup);
    assert_eq!(missing, Err(AuthError::MissingField { field: Field::Email }));

    assert_eq!(calls.get(), 2);
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = Arc::new(RegistrationValidator::with_default_policy().expect("default policy"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || {
                let mut submission = fixtures::valid_submission();
                if i % 2 == 1 {
                    submission.phone = "123".to_string();
                }
                validator.check(&submission).is_empty()
            })
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn test_configured_policy_drives_validator() -> TestResult<()> {
    let source = r#"
        [registration]
        age_min = 15
        age_max = 99
    "#;
    let app_config: AppConfig = ::config::Config::builder()
        .add_source(::config::File::from_str(source, ::config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    crate::config::ConfigValidator::validate_config(&app_config)?;

    let validator = RegistrationValidator::new(app_config.registration)?;
    let mut submission = fixtures::valid_submission();
    submission.age = 21;
    assert!(validator.validate(submission).is_ok());
    Ok(())
}

#[test]
fn test_error_log_record_for_rejection() -> TestResult<()> {
    let validator = RegistrationValidator::with_default_policy()?;
    let errors = validator
        .validate(fixtures::empty_submission())
        .expect_err("empty submission must fail");
    let record = ErrorLog::from_error(&AppError::Validation(errors.to_string()));
    assert_eq!(record.code(), "VALIDATION");
    assert!(record.to_string().starts_with("VALIDATION - "));
    Ok(())
}
