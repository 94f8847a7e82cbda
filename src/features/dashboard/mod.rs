mod client;
mod types;

pub use client::{DASHBOARD_LOAD_FAILED_MESSAGE, Dashboard, LATEST_ALERTS_LIMIT, load_dashboard};
pub use types::{CardValue, Cards, ConnectionStatus, DashboardStats, LoginChart};
