//! FFI use-case API for the Flutter goal screen.
//!
//! # Responsibility
//! - Expose goal screen actions to Dart via FRB.
//! - Own the one in-memory goal store for the app process.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Goal ids cross the boundary as plain strings.

use crate::view::{AddGoalForm, EditGoalForm};
use goaltrack_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Goal, GoalError, GoalId, GoalStore, ProgressDirection,
};
use log::warn;
use std::sync::{Mutex, OnceLock, PoisonError};

static GOAL_STORE: OnceLock<Mutex<GoalStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to repeat with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One goal row as rendered by the goal list.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalItem {
    pub id: String,
    pub title: String,
    pub current: u32,
    pub target: u32,
    /// Progress bar fill in `[0.0, 1.0]`.
    pub progress: f64,
    /// `current / target` caption.
    pub label: String,
}

impl From<&Goal> for GoalItem {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id().to_string(),
            title: goal.title().to_string(),
            current: goal.current(),
            target: goal.target(),
            progress: goal.progress_ratio(),
            label: goal.progress_label(),
        }
    }
}

/// Result envelope for goal mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalActionResponse {
    /// Whether the action changed or matched a goal.
    pub ok: bool,
    /// Affected goal id, when one is known.
    pub goal_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl GoalActionResponse {
    fn success(message: impl Into<String>, goal_id: &GoalId) -> Self {
        Self {
            ok: true,
            goal_id: Some(goal_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(action: &str, err: GoalError) -> Self {
        warn!("event={action} module=ffi status=rejected reason=\"{err}\"");
        Self {
            ok: false,
            goal_id: None,
            message: format!("{action} failed: {err}"),
        }
    }
}

/// Lists all goals in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_list() -> Vec<GoalItem> {
    with_store(|store| store.goals().iter().map(GoalItem::from).collect())
}

/// Creates a goal from the add dialog's title and target text.
///
/// Empty titles and non-positive targets leave the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_create(title: String, target_text: String) -> GoalActionResponse {
    let mut form = AddGoalForm { title, target_text };
    match with_store(|store| form.submit(store)) {
        Ok(id) => GoalActionResponse::success("Goal created.", &id),
        Err(err) => GoalActionResponse::failure("goal_create", err),
    }
}

/// Steps one goal's progress by a symbolic direction (`increase|decrease`).
#[flutter_rust_bridge::frb(sync)]
pub fn goal_adjust(goal_id: String, direction: String) -> GoalActionResponse {
    match direction.parse::<ProgressDirection>() {
        Ok(direction) => adjust(goal_id, direction),
        Err(err) => GoalActionResponse {
            ok: false,
            goal_id: None,
            message: format!("goal_adjust failed: {err}"),
        },
    }
}

/// `+` button.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_increase(goal_id: String) -> GoalActionResponse {
    adjust(goal_id, ProgressDirection::Increase)
}

/// `-` button.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_decrease(goal_id: String) -> GoalActionResponse {
    adjust(goal_id, ProgressDirection::Decrease)
}

/// Saves the edit dialog's title for one goal. Empty titles are accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn goal_rename(goal_id: String, title: String) -> GoalActionResponse {
    let id = GoalId::from(goal_id);
    let result = with_store(|store| {
        let mut form = store
            .get(&id)
            .map(EditGoalForm::open)
            .ok_or_else(|| GoalError::NotFound(id.clone()))?;
        form.title = title;
        form.save(store)
    });
    match result {
        Ok(()) => GoalActionResponse::success("Goal renamed.", &id),
        Err(err) => GoalActionResponse::failure("goal_rename", err),
    }
}

/// Deletes one goal (swipe action or edit dialog).
#[flutter_rust_bridge::frb(sync)]
pub fn goal_remove(goal_id: String) -> GoalActionResponse {
    let id = GoalId::from(goal_id);
    match with_store(|store| store.try_remove(&id)) {
        Ok(_) => GoalActionResponse::success("Goal deleted.", &id),
        Err(err) => GoalActionResponse::failure("goal_remove", err),
    }
}

fn adjust(goal_id: String, direction: ProgressDirection) -> GoalActionResponse {
    let id = GoalId::from(goal_id);
    match with_store(|store| store.try_adjust_progress(&id, direction)) {
        Ok(update) if update.changed() => GoalActionResponse::success("Progress updated.", &id),
        Ok(_) => GoalActionResponse::success("Progress unchanged.", &id),
        Err(err) => GoalActionResponse::failure("goal_adjust", err),
    }
}

fn with_store<T>(f: impl FnOnce(&mut GoalStore) -> T) -> T {
    let store = GOAL_STORE.get_or_init(|| Mutex::new(GoalStore::new()));
    // Transitions never leave a goal out of bounds, so poison is recoverable.
    let mut guard = store.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}
