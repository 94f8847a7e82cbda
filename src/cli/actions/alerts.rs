use crate::{
    cli::{globals::GlobalArgs, render},
    features::alerts::{ALERTS_LOAD_FAILED_MESSAGE, Alert, list_alerts},
    routes::Route,
};
use anyhow::{Result, anyhow};
use tracing::debug;

/// # Errors
/// Returns the login redirect without a session, or the list failure message.
pub async fn execute(globals: &GlobalArgs) -> Result<()> {
    let api = globals.guarded_api(Route::Alerts)?;

    let alerts = list_alerts(&api, None).await.map_err(|err| {
        debug!("alerts load failed: {err}");
        anyhow!(ALERTS_LOAD_FAILED_MESSAGE)
    })?;

    let rows: Vec<_> = alerts.iter().map(Alert::row).collect();
    print!("{}", render::table(Alert::COLUMNS, &rows));
    Ok(())
}
