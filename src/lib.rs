//! # UEBAX (Administrative Dashboard Client)
//!
//! `uebax` talks to the UEBAX monitoring API: it signs operators in and out,
//! registers accounts, walks the password-reset flow and reads the dashboard
//! statistics, events and alerts.
//!
//! ## Session & Request Pipeline
//!
//! Every backend call goes through a single gateway ([`client::api::ApiClient`]).
//! The gateway reads the credential pair from an injected
//! [`client::session::SessionStore`], attaches `Authorization: Bearer <access>`
//! unless the call opts out, and turns any non-2xx answer into exactly one
//! human-readable message.
//!
//! ## Guards & Flows
//!
//! - **Route Guard:** protected views only render when an access token is
//!   stored; otherwise they redirect to login and replace history.
//! - **Password Reset:** a three-step flow (`request` → `verify` → `confirm`)
//!   whose email and code travel between steps as navigation payloads and are
//!   never persisted.
//!
//! Token material is kept in `SecretString` and must never be logged.

pub mod cli;
pub mod client;
pub mod features;
pub mod routes;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
