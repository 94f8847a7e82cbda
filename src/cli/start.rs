use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Parses the command line, installs logging and picks the action to run.
///
/// # Errors
///
/// Returns an error if logging cannot be installed or the arguments cannot be
/// turned into an action
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or_default();
    telemetry::init(verbosity)?;

    dispatch::handler(&matches)
}
