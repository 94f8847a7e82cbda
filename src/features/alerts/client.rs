use super::types::Alert;
use crate::{
    client::{ApiClient, AppError, RequestDescriptor},
    features::listing::Listing,
};
use tracing::{debug, instrument};

pub const ALERTS_LOAD_FAILED_MESSAGE: &str = "Failed to load alerts.";

/// Fetches alerts, newest first as the backend orders them. `limit` caps the
/// page size; an empty answer is an empty list.
///
/// # Errors
/// Returns the gateway errors.
#[instrument(skip(api))]
pub async fn list_alerts(api: &ApiClient, limit: Option<usize>) -> Result<Vec<Alert>, AppError> {
    let endpoint = match limit {
        Some(limit) => format!("/alerts/?limit={limit}"),
        None => "/alerts/".to_string(),
    };

    let alerts = api
        .send_optional_json::<Listing<Alert>>(RequestDescriptor::get(endpoint))
        .await?
        .map(Listing::into_items)
        .unwrap_or_default();
    debug!("loaded {} alerts", alerts.len());

    Ok(alerts)
}
