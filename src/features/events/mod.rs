mod client;
mod types;

pub use client::{EVENTS_LOAD_FAILED_MESSAGE, list_events};
pub use types::Event;
