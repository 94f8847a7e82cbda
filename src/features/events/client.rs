use super::types::Event;
use crate::{
    client::{ApiClient, AppError, RequestDescriptor},
    features::listing::Listing,
};
use tracing::{debug, instrument};

pub const EVENTS_LOAD_FAILED_MESSAGE: &str = "Failed to load events.";

/// # Errors
/// Returns the gateway errors.
#[instrument(skip(api))]
pub async fn list_events(api: &ApiClient) -> Result<Vec<Event>, AppError> {
    let events = api
        .send_optional_json::<Listing<Event>>(RequestDescriptor::get("/events/"))
        .await?
        .map(Listing::into_items)
        .unwrap_or_default();
    debug!("loaded {} events", events.len());

    Ok(events)
}
