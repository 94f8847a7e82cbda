use crate::cli::actions::{
    Action, alerts, dashboard, events, login, logout, password_reset, register, status,
};
use anyhow::Result;

/// Runs the action picked from the command line.
///
/// # Errors
/// Returns the error of the failed command.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(globals, args) => login::execute(&globals, args).await,
        Action::Logout(globals) => logout::execute(&globals).await,
        Action::Register(globals, args) => register::execute(&globals, args).await,
        Action::PasswordReset(globals, args) => password_reset::execute(&globals, args).await,
        Action::Dashboard(globals) => dashboard::execute(&globals).await,
        Action::Events(globals) => events::execute(&globals).await,
        Action::Alerts(globals) => alerts::execute(&globals).await,
        Action::Status(globals) => status::execute(&globals),
    }
}
