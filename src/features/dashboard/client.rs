use super::types::DashboardStats;
use crate::{
    client::{ApiClient, AppError, RequestDescriptor},
    features::alerts::{Alert, list_alerts},
};
use tracing::{debug, instrument};

pub const DASHBOARD_LOAD_FAILED_MESSAGE: &str =
    "Failed to load dashboard data. Try logging in again.";

/// Number of alerts shown in the "latest alerts" panel.
pub const LATEST_ALERTS_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub latest_alerts: Vec<Alert>,
}

/// Loads the statistics and the latest alerts concurrently.
///
/// # Errors
/// Fails as a whole if either call fails; there is no partial dashboard.
#[instrument(skip(api))]
pub async fn load_dashboard(api: &ApiClient) -> Result<Dashboard, AppError> {
    let stats = api.send_json::<DashboardStats>(RequestDescriptor::get("/dashboard/stats/"));
    let alerts = list_alerts(api, Some(LATEST_ALERTS_LIMIT));

    let (stats, latest_alerts) = tokio::try_join!(stats, alerts)?;
    debug!(
        "dashboard loaded with {} status rows",
        stats.tabela_status_conexao.len()
    );

    Ok(Dashboard {
        stats,
        latest_alerts,
    })
}
