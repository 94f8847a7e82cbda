//! Password reset: request a code by email, verify it, choose a new password.
//!
//! The flow is an explicit tagged state ([`flow::ResetStep`]). Email and code
//! travel between steps only inside the navigation payload; nothing is
//! persisted, so restarting mid-flow sends the user back to the first step.
//! All three endpoints are unauthenticated.

pub mod client;
pub mod flow;
pub(crate) mod types;

pub use flow::{
    CODE_SENT_MESSAGE, CODE_VERIFIED_MESSAGE, CONFIRM_DELAY, PASSWORD_RESET_MESSAGE,
    PasswordResetFlow, ResetStep, STEP_DELAY, StepEntry, StepInput, StepKind,
};
