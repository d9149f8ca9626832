//! Goal domain model.
//!
//! # Responsibility
//! - Define the tracked goal record and its clamped progress counter.
//! - Validate goal values arriving through deserialization.
//!
//! # Invariants
//! - `id` is assigned once and never changes.
//! - `target` is at least 1 and never changes after construction.
//! - `current` stays within `[0, target]`; mutations clamp instead of failing.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Opaque, stable identifier of one goal.
///
/// Serialized as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for GoalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GoalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GoalId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Direction of a single progress step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressDirection {
    /// One step towards `target`.
    Increase,
    /// One step towards zero.
    Decrease,
}

impl ProgressDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}

/// Returned when direction text is not a known symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl Display for ParseDirectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported progress direction `{}`; expected increase|decrease",
            self.0
        )
    }
}

impl Error for ParseDirectionError {}

impl FromStr for ProgressDirection {
    type Err = ParseDirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "increase" | "up" | "+" => Ok(Self::Increase),
            "decrease" | "down" | "-" => Ok(Self::Decrease),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Validation failures for goal values built outside the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    /// Goal id is empty.
    EmptyId,
    /// Target must be a positive integer.
    ZeroTarget,
    /// Progress exceeds the goal target.
    CurrentAboveTarget { current: u32, target: u32 },
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "goal id must not be empty"),
            Self::ZeroTarget => write!(f, "goal target must be at least 1"),
            Self::CurrentAboveTarget { current, target } => {
                write!(f, "current ({current}) must be <= target ({target})")
            }
        }
    }
}

impl Error for GoalValidationError {}

/// One tracked objective with a clamped progress counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GoalRecord")]
pub struct Goal {
    id: GoalId,
    title: String,
    target: u32,
    current: u32,
}

/// Unvalidated wire shape used as the deserialization source for `Goal`.
#[derive(Deserialize)]
struct GoalRecord {
    id: GoalId,
    title: String,
    target: u32,
    current: u32,
}

impl TryFrom<GoalRecord> for Goal {
    type Error = GoalValidationError;

    fn try_from(record: GoalRecord) -> Result<Self, Self::Error> {
        let mut goal = Goal::new(record.id, record.title, record.target)?;
        if record.current > record.target {
            return Err(GoalValidationError::CurrentAboveTarget {
                current: record.current,
                target: record.target,
            });
        }
        goal.current = record.current;
        Ok(goal)
    }
}

impl Goal {
    /// Creates a goal with zero progress.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `ZeroTarget` when `target == 0`.
    pub fn new(
        id: GoalId,
        title: impl Into<String>,
        target: u32,
    ) -> Result<Self, GoalValidationError> {
        if id.as_str().is_empty() {
            return Err(GoalValidationError::EmptyId);
        }
        if target == 0 {
            return Err(GoalValidationError::ZeroTarget);
        }
        Ok(Self {
            id,
            title: title.into(),
            target,
            current: 0,
        })
    }

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Whether progress has reached the target.
    pub fn is_complete(&self) -> bool {
        self.current == self.target
    }

    /// Fraction of the target reached, in `[0.0, 1.0]`.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.current) / f64::from(self.target)
    }

    /// Display label in `current / target` form.
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.current, self.target)
    }

    /// Moves progress one step in `direction`, clamped to `[0, target]`.
    ///
    /// Returns the progress value before the step.
    pub(crate) fn step(&mut self, direction: ProgressDirection) -> u32 {
        let before = self.current;
        self.current = match direction {
            ProgressDirection::Increase => before.saturating_add(1).min(self.target),
            ProgressDirection::Decrease => before.saturating_sub(1),
        };
        before
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }
}
