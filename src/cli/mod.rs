pub mod actions;
pub mod commands;
pub mod dispatch;
pub mod globals;
pub mod telemetry;

mod prompt;
mod render;
mod start;
pub use self::start::start;
