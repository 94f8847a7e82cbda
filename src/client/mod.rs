//! Session/request pipeline shared by every feature: the request gateway,
//! the session store, configuration and the error type views render.
//! Callers must not log token material.

pub mod api;
pub mod config;
pub mod errors;
pub mod session;

pub use api::{ApiClient, DEFAULT_ERROR_MESSAGE, RequestDescriptor, normalize_error};
pub use config::AppConfig;
pub use errors::{AppError, SessionError};
pub use session::{Credentials, FileSessionStore, MemorySessionStore, SessionStore};
