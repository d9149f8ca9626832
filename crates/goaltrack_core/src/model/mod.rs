//! Domain model for goal tracking.
//!
//! # Responsibility
//! - Define the canonical goal record shared by store and presentation.
//! - Parse the loosely typed text the presentation layer hands over.
//!
//! # Invariants
//! - Every goal is identified by a stable `GoalId`.
//! - `0 <= current <= target` and `target >= 1` for every goal value.

pub mod goal;
pub mod target;
