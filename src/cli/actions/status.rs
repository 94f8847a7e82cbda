use crate::{cli::globals::GlobalArgs, features::auth::RouteGuard};
use anyhow::Result;

/// Reports whether a session is stored. The token itself is never printed.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn execute(globals: &GlobalArgs) -> Result<()> {
    let config = globals.config()?;
    let api = globals.api()?;

    if RouteGuard::new(api.session().clone()).is_authorized() {
        println!("Logged in (session: {})", config.session_file.display());
    } else {
        println!("Not logged in");
    }
    println!("API: {}", config.api_base_url);
    Ok(())
}
