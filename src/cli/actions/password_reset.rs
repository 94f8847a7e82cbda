use crate::{
    cli::{globals::GlobalArgs, prompt::ask},
    features::password_reset::{PasswordResetFlow, ResetStep, StepInput},
};
use anyhow::Result;
use secrecy::SecretString;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub email: Option<String>,
}

/// Walks the three reset steps on the terminal.
///
/// # Errors
/// Returns an error if the configuration is invalid or stdin is closed.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<()> {
    let flow = PasswordResetFlow::new(globals.api()?);
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    walk(flow, args.email, &mut input, &mut output, true).await
}

/// Prompts for the current step until the flow leaves for login. A failed
/// submission prints the error and asks for the same step again. With `wait`
/// the success message stays up for the navigation delay.
pub(crate) async fn walk<R: BufRead, W: Write>(
    mut flow: PasswordResetFlow,
    mut email: Option<String>,
    input: &mut R,
    output: &mut W,
    wait: bool,
) -> Result<()> {
    loop {
        let step_input = match flow.step() {
            ResetStep::RequestReset => {
                let email = match email.take() {
                    Some(email) => email,
                    None => ask(input, output, "Email")?,
                };
                StepInput::Email(email)
            }
            ResetStep::VerifyCode { email } => {
                writeln!(output, "Enter the code sent to {email}")?;
                StepInput::Code(ask(input, output, "Code")?)
            }
            ResetStep::ConfirmNewPassword { .. } => StepInput::NewPassword {
                password: SecretString::from(ask(input, output, "New password")?),
                confirmation: SecretString::from(ask(input, output, "Confirm new password")?),
            },
        };

        match flow.submit(step_input).await {
            Ok(navigation) => {
                if let Some(message) = flow.feedback().success() {
                    writeln!(output, "{message}")?;
                }
                if wait {
                    tokio::time::sleep(navigation.delay).await;
                }
                if !flow.follow(&navigation) {
                    return Ok(());
                }
            }
            Err(err) => {
                debug!("reset step failed: {err}");
                if let Some(message) = flow.feedback().error() {
                    writeln!(output, "{message}")?;
                }
            }
        }
    }
}
