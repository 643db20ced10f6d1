//! Headliner application module.
//!
//! The runtime owns `AppState`, feeds it from background fetch workers and
//! applies user commands between redraws.

/// Typed user commands and their state transitions.
pub mod commands;
/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use commands::{Command, RequestSenders, apply_command};
pub use runtime::run;
