use crate::{
    cli::{globals::GlobalArgs, render},
    features::events::{EVENTS_LOAD_FAILED_MESSAGE, Event, list_events},
    routes::Route,
};
use anyhow::{Result, anyhow};
use tracing::debug;

/// # Errors
/// Returns the login redirect without a session, or the list failure message.
pub async fn execute(globals: &GlobalArgs) -> Result<()> {
    let api = globals.guarded_api(Route::Events)?;

    let events = list_events(&api).await.map_err(|err| {
        debug!("events load failed: {err}");
        anyhow!(EVENTS_LOAD_FAILED_MESSAGE)
    })?;

    let rows: Vec<_> = events.iter().map(Event::row).collect();
    print!("{}", render::table(Event::COLUMNS, &rows));
    Ok(())
}
