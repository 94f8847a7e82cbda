//! Local checks that run before any request is issued. A failure here is an
//! `AppError::Validation` and never reaches the network.

use crate::client::AppError;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Rejects empty or whitespace-only input for `field`.
///
/// # Errors
/// Returns `AppError::Validation` naming the field.
pub fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

/// # Errors
/// Returns `AppError::Validation` if the address is missing or malformed.
pub fn require_email(email: &str) -> Result<(), AppError> {
    require("Email", email)?;
    if valid_email(email.trim()) {
        Ok(())
    } else {
        Err(AppError::Validation("Invalid email address".to_string()))
    }
}

/// # Errors
/// Returns `AppError::Validation` with "Passwords do not match" on mismatch.
pub fn passwords_match(
    password: &SecretString,
    confirmation: &SecretString,
) -> Result<(), AppError> {
    if password.expose_secret() == confirmation.expose_secret() {
        Ok(())
    } else {
        Err(AppError::Validation(PASSWORDS_DO_NOT_MATCH.to_string()))
    }
}
