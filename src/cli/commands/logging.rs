use clap::{Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Names accepted in `UEBAX_LOG_LEVEL`, indexed by verbosity count.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Reads a log level given by name or as a count.
///
/// # Errors
/// Returns a message naming the rejected value.
pub fn parse_log_level(level: &str) -> Result<u8, String> {
    let level = level.trim();
    match level.parse::<u8>() {
        Ok(count) if usize::from(count) < LEVEL_NAMES.len() => Ok(count),
        _ => LEVEL_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(level))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("invalid log level: {level}")),
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Repeat to log more (-v warn, -vv info, -vvv debug, -vvvv trace)")
            .env("UEBAX_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(parse_log_level),
    )
}
