//! Feature clients: typed wrappers over the request gateway, one per screen
//! family. They own request/response shapes and local validation so views
//! only collect input and render results.

pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod feedback;
mod listing;
pub mod password_reset;
pub mod validation;
