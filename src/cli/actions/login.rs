use crate::{
    cli::globals::GlobalArgs,
    features::auth::{LoginForm, login, login_failure_message},
};
use anyhow::{Result, anyhow};
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub email: String,
    pub password: SecretString,
}

/// # Errors
/// Returns the login view's failure message.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<()> {
    let api = globals.api()?;
    let form = LoginForm {
        email: args.email,
        password: args.password,
    };

    match login(&api, &form).await {
        Ok(navigation) => {
            debug!("navigating to {}", navigation.to);
            println!("Logged in as {}", form.email.trim());
            Ok(())
        }
        Err(err) => {
            debug!("login failed: {err}");
            Err(anyhow!(login_failure_message(&err)))
        }
    }
}
