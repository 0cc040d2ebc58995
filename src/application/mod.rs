//! Application layer - Use cases and validators
//!
//! This module orchestrates the domain rules for the two request types the
//! core handles: account registration and login.

pub mod login;
pub mod ports;
pub mod registration;

pub use login::{AuthError, LoginValidator};
pub use ports::{AccountStore, Authenticator};
pub use registration::{RegisterAccountUseCase, RegistrationError, RegistrationValidator};
