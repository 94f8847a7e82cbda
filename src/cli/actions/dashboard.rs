use crate::{
    cli::{globals::GlobalArgs, render},
    features::dashboard::{DASHBOARD_LOAD_FAILED_MESSAGE, load_dashboard},
    routes::Route,
};
use anyhow::{Result, anyhow};
use tracing::debug;

/// # Errors
/// Returns the login redirect without a session, or the dashboard failure
/// message if either call fails.
pub async fn execute(globals: &GlobalArgs) -> Result<()> {
    let api = globals.guarded_api(Route::Dashboard)?;

    let dashboard = load_dashboard(&api).await.map_err(|err| {
        debug!("dashboard load failed: {err}");
        anyhow!(DASHBOARD_LOAD_FAILED_MESSAGE)
    })?;

    print!("{}", render::dashboard(&dashboard));
    Ok(())
}
