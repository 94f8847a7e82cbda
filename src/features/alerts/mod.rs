mod client;
mod types;

pub use client::{ALERTS_LOAD_FAILED_MESSAGE, list_alerts};
pub use types::Alert;
