pub mod alerts;
pub mod dashboard;
pub mod events;
pub mod login;
pub mod logout;
pub mod password_reset;
pub mod register;
pub mod status;

// Internal "interpreter" for `Action`.
mod run;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Login(GlobalArgs, login::Args),
    Logout(GlobalArgs),
    Register(GlobalArgs, register::Args),
    PasswordReset(GlobalArgs, password_reset::Args),
    Dashboard(GlobalArgs),
    Events(GlobalArgs),
    Alerts(GlobalArgs),
    Status(GlobalArgs),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
