use super::client::{confirm_new_password, request_code, verify_code};
use crate::{
    client::{ApiClient, AppError},
    features::feedback::Feedback,
    routes::{Navigation, NavigationState, Route},
};
use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;

pub const CODE_SENT_MESSAGE: &str = "Code sent! Redirecting...";
pub const CODE_VERIFIED_MESSAGE: &str = "Code verified! Redirecting...";
pub const PASSWORD_RESET_MESSAGE: &str = "Your password has been reset! Redirecting to login...";

/// How long the request and verify steps show their success message.
pub const STEP_DELAY: Duration = Duration::from_secs(2);
/// How long the final step shows its success message before login.
pub const CONFIRM_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    RequestReset,
    VerifyCode,
    ConfirmNewPassword,
}

impl StepKind {
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::RequestReset => Route::ResetRequest,
            Self::VerifyCode => Route::ResetVerify,
            Self::ConfirmNewPassword => Route::ResetConfirm,
        }
    }

    #[must_use]
    pub const fn from_route(route: Route) -> Option<Self> {
        match route {
            Route::ResetRequest => Some(Self::RequestReset),
            Route::ResetVerify => Some(Self::VerifyCode),
            Route::ResetConfirm => Some(Self::ConfirmNewPassword),
            _ => None,
        }
    }
}

/// Where the flow stands, with exactly the state that step needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetStep {
    RequestReset,
    VerifyCode { email: String },
    ConfirmNewPassword { email: String, token: String },
}

/// Result of entering a step with the payload the previous view handed over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepEntry {
    Render(ResetStep),
    Redirect(Navigation),
}

impl ResetStep {
    /// Entry guard shared by every step: a step only renders when the payload
    /// carries everything it needs (non-empty), otherwise the flow restarts at
    /// `RequestReset`, replacing history.
    #[must_use]
    pub fn enter(kind: StepKind, carried: &NavigationState) -> StepEntry {
        let email = non_empty(carried.email.as_deref());
        let token = non_empty(carried.token.as_deref());

        let step = match (kind, email, token) {
            (StepKind::RequestReset, _, _) => Some(Self::RequestReset),
            (StepKind::VerifyCode, Some(email), _) => Some(Self::VerifyCode { email }),
            (StepKind::ConfirmNewPassword, Some(email), Some(token)) => {
                Some(Self::ConfirmNewPassword { email, token })
            }
            _ => None,
        };

        match step {
            Some(step) => StepEntry::Render(step),
            None => {
                debug!("missing reset state for {:?}, restarting flow", kind);
                StepEntry::Redirect(Navigation::replace(Route::ResetRequest))
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> StepKind {
        match self {
            Self::RequestReset => StepKind::RequestReset,
            Self::VerifyCode { .. } => StepKind::VerifyCode,
            Self::ConfirmNewPassword { .. } => StepKind::ConfirmNewPassword,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(ToString::to_string)
}

/// Form input for the step currently shown.
#[derive(Clone, Debug)]
pub enum StepInput {
    Email(String),
    Code(String),
    NewPassword {
        password: SecretString,
        confirmation: SecretString,
    },
}

/// Drives one view of the reset flow: submits the current step, keeps its
/// feedback and applies the navigation hop to the next step.
pub struct PasswordResetFlow {
    api: ApiClient,
    step: ResetStep,
    feedback: Feedback,
}

impl PasswordResetFlow {
    /// Starts at the entry point.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            step: ResetStep::RequestReset,
            feedback: Feedback::new(),
        }
    }

    /// Opens the flow at `kind` with a navigation payload.
    ///
    /// # Errors
    /// Returns the redirect to the entry point when the payload is incomplete.
    pub fn resume(
        api: ApiClient,
        kind: StepKind,
        carried: &NavigationState,
    ) -> Result<Self, Navigation> {
        match ResetStep::enter(kind, carried) {
            StepEntry::Render(step) => Ok(Self {
                api,
                step,
                feedback: Feedback::new(),
            }),
            StepEntry::Redirect(navigation) => Err(navigation),
        }
    }

    #[must_use]
    pub fn step(&self) -> &ResetStep {
        &self.step
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Submits the current step. On failure the flow stays on the same step
    /// and the error is kept in the feedback.
    ///
    /// # Errors
    /// Returns local validation errors, the gateway errors, or a validation
    /// error when `input` does not belong to the current step.
    pub async fn submit(&mut self, input: StepInput) -> Result<Navigation, AppError> {
        self.feedback.begin();

        let result = match (&self.step, input) {
            (ResetStep::RequestReset, StepInput::Email(email)) => {
                let email = email.trim().to_string();
                request_code(&self.api, &email).await.map(|()| {
                    Navigation::push(Route::ResetVerify)
                        .with_state(NavigationState {
                            email: Some(email),
                            token: None,
                        })
                        .after(STEP_DELAY)
                })
            }
            (ResetStep::VerifyCode { email }, StepInput::Code(code)) => {
                let code = code.trim().to_string();
                verify_code(&self.api, email, &code).await.map(|()| {
                    Navigation::push(Route::ResetConfirm)
                        .with_state(NavigationState {
                            email: Some(email.clone()),
                            token: Some(code),
                        })
                        .after(STEP_DELAY)
                })
            }
            (
                ResetStep::ConfirmNewPassword { email, token },
                StepInput::NewPassword {
                    password,
                    confirmation,
                },
            ) => confirm_new_password(&self.api, email, token, &password, &confirmation)
                .await
                .map(|()| Navigation::push(Route::Login).after(CONFIRM_DELAY)),
            (step, _) => Err(AppError::Validation(format!(
                "Unexpected input for {}",
                step.kind().route()
            ))),
        };

        match &result {
            Ok(_) => self.feedback.succeed(success_message(self.step.kind())),
            Err(err) => self.feedback.fail(err.message()),
        }

        result
    }

    /// Applies a navigation produced by [`Self::submit`]. Returns `false` once
    /// the navigation leaves the flow (login).
    pub fn follow(&mut self, navigation: &Navigation) -> bool {
        let Some(kind) = StepKind::from_route(navigation.to) else {
            return false;
        };

        self.step = match ResetStep::enter(kind, &navigation.state) {
            StepEntry::Render(step) => step,
            StepEntry::Redirect(_) => ResetStep::RequestReset,
        };
        self.feedback = Feedback::new();
        true
    }
}

const fn success_message(kind: StepKind) -> &'static str {
    match kind {
        StepKind::RequestReset => CODE_SENT_MESSAGE,
        StepKind::VerifyCode => CODE_VERIFIED_MESSAGE,
        StepKind::ConfirmNewPassword => PASSWORD_RESET_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemorySessionStore;
    use anyhow::{Result, anyhow};
    use serde_json::json;
    use std::{net::TcpListener, sync::Arc};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    fn carried(email: Option<&str>, token: Option<&str>) -> NavigationState {
        NavigationState {
            email: email.map(ToString::to_string),
            token: token.map(ToString::to_string),
        }
    }

    #[test]
    fn verify_without_email_restarts_flow() {
        let entry = ResetStep::enter(StepKind::VerifyCode, &NavigationState::default());
        assert_eq!(
            entry,
            StepEntry::Redirect(Navigation::replace(Route::ResetRequest))
        );
    }

    #[test]
    fn confirm_without_token_restarts_flow() {
        let entry = ResetStep::enter(
            StepKind::ConfirmNewPassword,
            &carried(Some("ops@uebax.dev"), None),
        );
        assert_eq!(
            entry,
            StepEntry::Redirect(Navigation::replace(Route::ResetRequest))
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        let entry = ResetStep::enter(StepKind::VerifyCode, &carried(Some("  "), None));
        assert!(matches!(entry, StepEntry::Redirect(_)));
    }

    #[test]
    fn complete_payloads_render() {
        assert_eq!(
            ResetStep::enter(StepKind::RequestReset, &NavigationState::default()),
            StepEntry::Render(ResetStep::RequestReset)
        );
        assert_eq!(
            ResetStep::enter(StepKind::VerifyCode, &carried(Some("a@b.co"), None)),
            StepEntry::Render(ResetStep::VerifyCode {
                email: "a@b.co".to_string()
            })
        );
        assert_eq!(
            ResetStep::enter(
                StepKind::ConfirmNewPassword,
                &carried(Some("a@b.co"), Some("123456"))
            ),
            StepEntry::Render(ResetStep::ConfirmNewPassword {
                email: "a@b.co".to_string(),
                token: "123456".to_string()
            })
        );
    }

    #[test]
    fn resume_returns_redirect_for_incomplete_payload() -> Result<()> {
        let api = ApiClient::new("http://127.0.0.1:9", Arc::new(MemorySessionStore::new()))?;
        let state = NavigationState::default();
        let redirect = PasswordResetFlow::resume(api, StepKind::VerifyCode, &state)
            .err()
            .ok_or_else(|| anyhow!("expected redirect"))?;
        assert_eq!(redirect.to, Route::ResetRequest);
        assert!(redirect.replace);
        Ok(())
    }

    #[tokio::test]
    async fn mismatched_passwords_never_reach_backend() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/password-reset/confirm/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri(), Arc::new(MemorySessionStore::new()))?;
        let mut flow = PasswordResetFlow::resume(
            api,
            StepKind::ConfirmNewPassword,
            &carried(Some("ops@uebax.dev"), Some("123456")),
        )
        .map_err(|_| anyhow!("expected confirm step"))?;

        let result = flow
            .submit(StepInput::NewPassword {
                password: secret("first"),
                confirmation: secret("second"),
            })
            .await;
        assert!(result.is_err());
        assert_eq!(flow.feedback().error(), Some("Passwords do not match"));
        assert_eq!(flow.step().kind(), StepKind::ConfirmNewPassword);
        Ok(())
    }

    #[tokio::test]
    async fn failed_step_stays_put_and_shows_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/password-reset/verify/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "detail": "Invalid token"
            })))
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri(), Arc::new(MemorySessionStore::new()))?;
        let mut flow = PasswordResetFlow::resume(
            api,
            StepKind::VerifyCode,
            &carried(Some("ops@uebax.dev"), None),
        )
        .map_err(|_| anyhow!("expected verify step"))?;

        let result = flow.submit(StepInput::Code("000000".to_string())).await;
        assert!(result.is_err());
        assert_eq!(flow.feedback().error(), Some("Invalid token"));
        assert_eq!(
            flow.step(),
            &ResetStep::VerifyCode {
                email: "ops@uebax.dev".to_string()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn wrong_input_for_step_is_rejected() -> Result<()> {
        let api = ApiClient::new("http://127.0.0.1:9", Arc::new(MemorySessionStore::new()))?;
        let mut flow = PasswordResetFlow::new(api);
        let result = flow.submit(StepInput::Code("123456".to_string())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(flow.step(), &ResetStep::RequestReset);
        Ok(())
    }

    #[tokio::test]
    async fn full_flow_carries_email_and_code() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/password-reset/request/"))
            .and(body_json(json!({"email": "ops@uebax.dev"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "sent"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/password-reset/verify/"))
            .and(body_json(json!({
                "email": "ops@uebax.dev",
                "token": "123456"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "ok"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/password-reset/confirm/"))
            .and(body_json(json!({
                "email": "ops@uebax.dev",
                "token": "123456",
                "password": "N3w-secret",
                "password2": "N3w-secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "done"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&server.uri(), Arc::new(MemorySessionStore::new()))?;
        let mut flow = PasswordResetFlow::new(api);

        let navigation = flow
            .submit(StepInput::Email(" ops@uebax.dev ".to_string()))
            .await?;
        assert_eq!(flow.feedback().success(), Some(CODE_SENT_MESSAGE));
        assert_eq!(navigation.to, Route::ResetVerify);
        assert_eq!(navigation.delay, STEP_DELAY);
        assert!(flow.follow(&navigation));
        assert_eq!(flow.step().kind(), StepKind::VerifyCode);

        let navigation = flow.submit(StepInput::Code("123456".to_string())).await?;
        assert_eq!(navigation.to, Route::ResetConfirm);
        assert_eq!(navigation.state.token.as_deref(), Some("123456"));
        assert!(flow.follow(&navigation));

        let navigation = flow
            .submit(StepInput::NewPassword {
                password: secret("N3w-secret"),
                confirmation: secret("N3w-secret"),
            })
            .await?;
        assert_eq!(flow.feedback().success(), Some(PASSWORD_RESET_MESSAGE));
        assert_eq!(navigation.to, Route::Login);
        assert_eq!(navigation.delay, CONFIRM_DELAY);
        assert!(!flow.follow(&navigation));
        Ok(())
    }
}
