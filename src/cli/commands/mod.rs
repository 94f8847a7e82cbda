pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_FILE: &str = "session-file";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("uebax")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Backend base URL, example: http://127.0.0.1:8000/api")
                .env("UEBAX_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Where the session tokens are kept (default: ~/.uebax/session.json)")
                .env("UEBAX_SESSION_FILE")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email")
                        .env("UEBAX_EMAIL")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("UEBAX_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("logout")
                .about("Invalidate and clear the stored session"),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Full name")
                        .required(true),
                )
                .arg(Arg::new("cpf").long("cpf").help("CPF").required(true))
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Account email")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password")
                        .required(true),
                )
                .arg(
                    Arg::new("password2")
                        .long("password2")
                        .help("Password confirmation")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("password-reset")
                .about("Reset a forgotten password (interactive)")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email; prompted for when missing"),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Show statistics and the latest alerts"),
        )
        .subcommand(Command::new("events").about("List access events"))
        .subcommand(Command::new("alerts").about("List alerts"))
        .subcommand(
            Command::new("status")
                .about("Show whether a session is stored"),
        );

    logging::with_args(command)
}
