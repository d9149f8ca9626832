//! Core domain logic for GoalTrack.
//! This crate is the single source of truth for goal invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::goal::{Goal, GoalId, GoalValidationError, ParseDirectionError, ProgressDirection};
pub use model::target::{parse_target, TargetParseError};
pub use store::goal_store::{GoalError, GoalResult, GoalStore, ProgressUpdate};
pub use store::id_gen::{IdGenerator, RandomIds, SequentialIds};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
