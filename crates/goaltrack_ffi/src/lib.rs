//! Flutter-facing bindings for GoalTrack core.

pub mod api;
pub mod view;
