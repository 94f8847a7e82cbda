use crate::{cli::globals::GlobalArgs, features::auth::logout};
use anyhow::{Context, Result};

/// # Errors
/// Returns an error only if the local session cannot be cleared.
pub async fn execute(globals: &GlobalArgs) -> Result<()> {
    let api = globals.api()?;
    logout(&api).await.context("failed to clear session")?;
    println!("Logged out");
    Ok(())
}
