//! Auth feature: login, logout, registration and the route guard.
//!
//! Login is the only writer of the credential pair and logout the only
//! caller of `clear`. The guard reads the same injected store. This module
//! touches token material and must not log it.

pub mod client;
pub mod guards;
pub mod types;

pub use client::{
    LOGIN_FAILED_MESSAGE, REGISTRATION_SUCCESS_MESSAGE, SERVER_UNREACHABLE_MESSAGE, login,
    login_failure_message, logout, register,
};
pub use guards::{Access, RouteGuard};
pub use types::{LoginForm, RegistrationForm};
