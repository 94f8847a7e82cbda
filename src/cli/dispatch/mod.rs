use crate::cli::{
    actions::{Action, login, password_reset, register},
    commands::{ARG_API_URL, ARG_SESSION_FILE},
    globals::GlobalArgs,
};
use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use std::path::PathBuf;

fn required(matches: &clap::ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn secret(matches: &clap::ArgMatches, id: &str) -> Result<SecretString> {
    required(matches, id).map(SecretString::from)
}

/// # Errors
/// Returns an error if required arguments are missing or no subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = GlobalArgs {
        api_url: matches.get_one::<String>(ARG_API_URL).cloned(),
        session_file: matches.get_one::<PathBuf>(ARG_SESSION_FILE).cloned(),
    };

    let action = match matches.subcommand() {
        Some(("login", sub_m)) => Action::Login(
            globals,
            login::Args {
                email: required(sub_m, "email")?,
                password: secret(sub_m, "password")?,
            },
        ),
        Some(("logout", _)) => Action::Logout(globals),
        Some(("register", sub_m)) => Action::Register(
            globals,
            register::Args {
                full_name: required(sub_m, "name")?,
                cpf: required(sub_m, "cpf")?,
                email: required(sub_m, "email")?,
                password: secret(sub_m, "password")?,
                password_confirmation: secret(sub_m, "password2")?,
            },
        ),
        Some(("password-reset", sub_m)) => Action::PasswordReset(
            globals,
            password_reset::Args {
                email: sub_m.get_one::<String>("email").cloned(),
            },
        ),
        Some(("dashboard", _)) => Action::Dashboard(globals),
        Some(("events", _)) => Action::Events(globals),
        Some(("alerts", _)) => Action::Alerts(globals),
        Some(("status", _)) => Action::Status(globals),
        Some((name, _)) => bail!("unknown subcommand: {name}"),
        None => bail!("missing subcommand"),
    };

    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    fn dispatch(args: &[&str]) -> Result<Action> {
        let matches = commands::new().try_get_matches_from(args.iter().copied())?;
        handler(&matches)
    }

    #[test]
    fn test_login_action() -> Result<()> {
        temp_env::with_vars(
            [("UEBAX_API_URL", None::<&str>), ("UEBAX_SESSION_FILE", None::<&str>)],
            || -> Result<()> {
                let action = dispatch(&[
                    "uebax",
                    "login",
                    "--email",
                    "ops@uebax.dev",
                    "--password",
                    "secret",
                    "--session-file",
                    "/tmp/uebax.json",
                ])?;
                let Action::Login(globals, args) = action else {
                    bail!("expected login action");
                };
                assert_eq!(globals.api_url, None);
                assert_eq!(globals.session_file, Some(PathBuf::from("/tmp/uebax.json")));
                assert_eq!(args.email, "ops@uebax.dev");
                assert_eq!(args.password.expose_secret(), "secret");
                Ok(())
            },
        )
    }

    #[test]
    fn test_view_actions() -> Result<()> {
        assert!(matches!(
            dispatch(&["uebax", "dashboard"])?,
            Action::Dashboard(_)
        ));
        assert!(matches!(dispatch(&["uebax", "events"])?, Action::Events(_)));
        assert!(matches!(dispatch(&["uebax", "alerts"])?, Action::Alerts(_)));
        assert!(matches!(dispatch(&["uebax", "status"])?, Action::Status(_)));
        assert!(matches!(dispatch(&["uebax", "logout"])?, Action::Logout(_)));
        Ok(())
    }

    #[test]
    fn test_password_reset_action() -> Result<()> {
        let action = dispatch(&["uebax", "password-reset", "--email", "ops@uebax.dev"])?;
        let Action::PasswordReset(_, args) = action else {
            bail!("expected password-reset action");
        };
        assert_eq!(args.email.as_deref(), Some("ops@uebax.dev"));
        Ok(())
    }
}
