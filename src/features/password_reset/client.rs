//! Client wrappers for the password-reset endpoints. Each call is a single
//! unauthenticated POST; success bodies only carry a message and are ignored.

use super::types::{ConfirmRequest, ResetRequest, VerifyRequest};
use crate::{
    client::{ApiClient, AppError, RequestDescriptor},
    features::validation::{passwords_match, require, require_email},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

/// Asks the backend to email a reset code.
///
/// # Errors
/// Returns `AppError::Validation` for a missing or malformed email, otherwise
/// the gateway errors.
#[instrument(skip(api))]
pub async fn request_code(api: &ApiClient, email: &str) -> Result<(), AppError> {
    require_email(email)?;
    let descriptor = RequestDescriptor::post("/password-reset/request/")
        .skip_auth()
        .json(&ResetRequest {
            email: email.trim(),
        })?;
    api.send_empty(descriptor).await
}

/// Checks the emailed code.
///
/// # Errors
/// Returns `AppError::Validation` for an empty code, otherwise the gateway
/// errors (e.g. invalid or expired code).
#[instrument(skip(api, token))]
pub async fn verify_code(api: &ApiClient, email: &str, token: &str) -> Result<(), AppError> {
    require("Code", token)?;
    let descriptor = RequestDescriptor::post("/password-reset/verify/")
        .skip_auth()
        .json(&VerifyRequest {
            email,
            token: token.trim(),
        })?;
    api.send_empty(descriptor).await
}

/// Sets the new password. The confirmation is compared locally first; a
/// mismatch never reaches the backend.
///
/// # Errors
/// Returns `AppError::Validation` ("Passwords do not match" or an empty
/// password), otherwise the gateway errors.
#[instrument(skip(api, token, password, confirmation))]
pub async fn confirm_new_password(
    api: &ApiClient,
    email: &str,
    token: &str,
    password: &SecretString,
    confirmation: &SecretString,
) -> Result<(), AppError> {
    passwords_match(password, confirmation)?;
    require("Password", password.expose_secret())?;

    let descriptor = RequestDescriptor::post("/password-reset/confirm/")
        .skip_auth()
        .json(&ConfirmRequest {
            email,
            token,
            password: password.expose_secret(),
            password2: confirmation.expose_secret(),
        })?;
    api.send_empty(descriptor).await
}
