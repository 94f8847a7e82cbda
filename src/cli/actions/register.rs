use crate::{
    cli::globals::GlobalArgs,
    features::auth::{REGISTRATION_SUCCESS_MESSAGE, RegistrationForm, register},
};
use anyhow::{Result, anyhow};
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub full_name: String,
    pub cpf: String,
    pub email: String,
    pub password: SecretString,
    pub password_confirmation: SecretString,
}

/// # Errors
/// Returns the local validation message or the normalized backend error.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<()> {
    let api = globals.api()?;
    let form = RegistrationForm {
        full_name: args.full_name,
        cpf: args.cpf,
        email: args.email,
        password: args.password,
        password_confirmation: args.password_confirmation,
    };

    register(&api, &form)
        .await
        .map_err(|err| anyhow!(err.message()))?;
    println!("{REGISTRATION_SUCCESS_MESSAGE}");
    Ok(())
}
