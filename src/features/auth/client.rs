//! Client wrappers for the auth endpoints. Login and registration skip auth;
//! logout is authenticated so the backend can blacklist the refresh token.

use super::types::{
    LoginForm, LoginRequest, LogoutRequest, RegisterRequest, RegistrationForm, TokenPairResponse,
};
use crate::{
    client::{ApiClient, AppError, Credentials, RequestDescriptor},
    features::validation::{passwords_match, require, require_email},
    routes::{Navigation, Route},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

/// Shown when the backend rejects the credentials.
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect username or password.";
/// Shown for every other login failure.
pub const SERVER_UNREACHABLE_MESSAGE: &str = "Unable to connect to the server.";
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration completed successfully!";

/// Marker of the backend's bad-credentials answer.
const BAD_CREDENTIALS_MARKER: &str = "No active account";

/// Authenticates and stores the returned pair; navigates to the dashboard.
///
/// # Errors
/// Returns `AppError::Validation` for empty fields, the gateway errors, or
/// `AppError::Session` if the pair cannot be stored.
#[instrument(skip(api, form), fields(email = %form.email.trim()))]
pub async fn login(api: &ApiClient, form: &LoginForm) -> Result<Navigation, AppError> {
    require_email(&form.email)?;
    require("Password", form.password.expose_secret())?;

    let descriptor = RequestDescriptor::post("/login/")
        .skip_auth()
        .json(&LoginRequest::from(form))?;
    let tokens: TokenPairResponse = api.send_json(descriptor).await?;

    api.session()
        .set(Credentials::new(tokens.access, tokens.refresh))?;
    info!("login succeeded");

    Ok(Navigation::push(Route::Dashboard))
}

/// Maps a login failure to the message the login view shows.
#[must_use]
pub fn login_failure_message(err: &AppError) -> String {
    match err {
        AppError::Validation(message) => message.clone(),
        other if other.message().contains(BAD_CREDENTIALS_MARKER) => {
            LOGIN_FAILED_MESSAGE.to_string()
        }
        _ => SERVER_UNREACHABLE_MESSAGE.to_string(),
    }
}

/// Invalidates the refresh token on the backend and clears the local session.
///
/// A backend failure is logged and ignored: the local session is cleared in
/// every case.
///
/// # Errors
/// Returns `AppError::Session` only if the local session cannot be cleared.
#[instrument(skip(api))]
pub async fn logout(api: &ApiClient) -> Result<Navigation, AppError> {
    let refresh: Option<SecretString> = api
        .session()
        .get()
        .map(|credentials| credentials.refresh_token().clone());

    let descriptor = RequestDescriptor::post("/logout/").json(&LogoutRequest {
        refresh: refresh.as_ref().map(|token| token.expose_secret()),
    })?;

    if let Err(err) = api.send_empty(descriptor).await {
        warn!("Backend logout failed: {err}");
    }

    api.session().clear()?;
    info!("session cleared");

    Ok(Navigation::push(Route::Login))
}

/// Creates an account; navigates to login on success.
///
/// # Errors
/// Returns `AppError::Validation` for missing fields or mismatched passwords
/// (no request is sent), otherwise the gateway errors.
#[instrument(skip(api, form), fields(email = %form.email.trim()))]
pub async fn register(api: &ApiClient, form: &RegistrationForm) -> Result<Navigation, AppError> {
    require("Full name", &form.full_name)?;
    require("CPF", &form.cpf)?;
    require_email(&form.email)?;
    require("Password", form.password.expose_secret())?;
    passwords_match(&form.password, &form.password_confirmation)?;

    let descriptor = RequestDescriptor::post("/register/")
        .skip_auth()
        .json(&RegisterRequest::from(form))?;
    api.send_empty(descriptor).await?;

    Ok(Navigation::push(Route::Login))
}
