use std::io::Read;

use anyhow::Context;
use serde_json::json;
use tracing::{error, info};
use utez_accounts::shared::LoggingUtils;
use utez_accounts::{AccountSubmission, AppConfig, AppError, ErrorLog, RegistrationValidator};

fn main() {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = LoggingUtils::initialize(&config.logging.level, &config.logging.format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(domain = %config.registration.email_domain, "Configuration loaded successfully");

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!("Validation run failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Validate one submission read from the path argument or stdin.
/// Returns whether it was accepted.
fn run(config: &AppConfig) -> anyhow::Result<bool> {
    let input = read_input()?;
    let submission: AccountSubmission =
        serde_json::from_str(&input).context("Failed to parse account submission")?;

    let validator = RegistrationValidator::new(config.registration.clone())?;

    match validator.validate(submission) {
        Ok(account) => {
            println!("{}", json!({ "status": "accepted", "email": account.email }));
            Ok(true)
        }
        Err(errors) => {
            let record = ErrorLog::from_error(&AppError::Validation(errors.to_string()));
            LoggingUtils::log_error_record(&record);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "status": "rejected", "errors": errors }))?
            );
            Ok(false)
        }
    }
}

fn read_input() -> anyhow::Result<String> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path)),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
