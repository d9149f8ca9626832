//! Goal store and its mutation contract.
//!
//! # Responsibility
//! - Hold the ordered goal collection.
//! - Apply create / progress / rename / remove transitions.
//!
//! # Invariants
//! - Every transition is synchronous and total over `(collection, args)`.
//! - Unknown ids and unusable create input leave the collection untouched.
//! - Log events carry ids and counts only, never goal titles.

use crate::model::goal::{Goal, GoalId, GoalValidationError, ProgressDirection};
use crate::model::target::{parse_target, TargetParseError};
use crate::store::id_gen::{IdGenerator, SequentialIds};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_ID_ATTEMPTS: usize = 8;

pub type GoalResult<T> = Result<T, GoalError>;

/// Reasons a strict store operation did not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    /// Create was called with an empty title.
    EmptyTitle,
    /// Create target text is unusable.
    InvalidTarget(TargetParseError),
    /// No goal carries the given id.
    NotFound(GoalId),
    /// The id generator kept returning ids already in use.
    IdCollision { attempts: usize },
    /// Goal value failed model validation.
    Invalid(GoalValidationError),
}

impl Display for GoalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "goal title must not be empty"),
            Self::InvalidTarget(err) => write!(f, "invalid goal target: {err}"),
            Self::NotFound(id) => write!(f, "goal not found: {id}"),
            Self::IdCollision { attempts } => {
                write!(f, "no unused goal id after {attempts} attempts")
            }
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GoalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTarget(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::EmptyTitle | Self::NotFound(_) | Self::IdCollision { .. } => None,
        }
    }
}

impl From<TargetParseError> for GoalError {
    fn from(value: TargetParseError) -> Self {
        Self::InvalidTarget(value)
    }
}

impl From<GoalValidationError> for GoalError {
    fn from(value: GoalValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Outcome of one applied progress step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub before: u32,
    pub after: u32,
}

impl ProgressUpdate {
    /// False when the step hit a bound and was clamped away.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Owner of the ordered goal collection.
#[derive(Debug)]
pub struct GoalStore {
    goals: Vec<Goal>,
    ids: Box<dyn IdGenerator>,
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalStore {
    /// Creates an empty store with sequential ids.
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIds::new())
    }

    /// Creates an empty store that draws ids from `ids`.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            goals: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// Ordered goal collection, oldest first.
    pub fn goals(&self) -> &[Goal] {
        self.goals.as_slice()
    }

    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id() == id)
    }

    pub fn contains(&self, id: &GoalId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Appends a new goal with zero progress.
    ///
    /// Returns `None` and leaves the collection unchanged when `title` is
    /// empty or `target_text` is not a positive integer.
    pub fn create(&mut self, title: impl Into<String>, target_text: &str) -> Option<GoalId> {
        match self.try_create(title, target_text) {
            Ok(id) => Some(id),
            Err(err) => {
                debug!("event=goal_create module=store status=ignored reason=\"{err}\"");
                None
            }
        }
    }

    /// Moves one goal's progress a single clamped step.
    ///
    /// Unknown ids are ignored.
    pub fn adjust_progress(&mut self, id: &GoalId, direction: ProgressDirection) {
        if let Err(err) = self.try_adjust_progress(id, direction) {
            debug!("event=goal_progress module=store status=ignored reason=\"{err}\"");
        }
    }

    /// Replaces one goal's title. Empty titles are accepted.
    ///
    /// Unknown ids are ignored.
    pub fn rename(&mut self, id: &GoalId, new_title: impl Into<String>) {
        if let Err(err) = self.try_rename(id, new_title) {
            debug!("event=goal_rename module=store status=ignored reason=\"{err}\"");
        }
    }

    /// Removes one goal, keeping the order of the rest.
    ///
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: &GoalId) {
        if let Err(err) = self.try_remove(id) {
            debug!("event=goal_remove module=store status=ignored reason=\"{err}\"");
        }
    }

    /// Strict form of [`GoalStore::create`].
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is empty.
    /// - `InvalidTarget` when `target_text` does not parse to a positive integer.
    /// - `IdCollision` when the id generator cannot produce an unused id.
    pub fn try_create(
        &mut self,
        title: impl Into<String>,
        target_text: &str,
    ) -> GoalResult<GoalId> {
        let title = title.into();
        if title.is_empty() {
            return Err(GoalError::EmptyTitle);
        }
        let target = parse_target(target_text)?;
        let id = self.fresh_id()?;
        let title_len = title.chars().count();
        self.goals.push(Goal::new(id.clone(), title, target)?);

        info!(
            "event=goal_create module=store status=ok goal_id={} target={} title_len={} count={}",
            id,
            target,
            title_len,
            self.goals.len()
        );
        Ok(id)
    }

    /// Strict form of [`GoalStore::adjust_progress`].
    ///
    /// Steps clamped at a bound still succeed with `before == after`.
    ///
    /// # Errors
    /// - `NotFound` when no goal has `id`.
    pub fn try_adjust_progress(
        &mut self,
        id: &GoalId,
        direction: ProgressDirection,
    ) -> GoalResult<ProgressUpdate> {
        let goal = self.goal_mut(id)?;
        let before = goal.step(direction);
        let update = ProgressUpdate {
            before,
            after: goal.current(),
        };

        debug!(
            "event=goal_progress module=store status={} goal_id={} direction={} current={} target={}",
            if update.changed() { "ok" } else { "clamped" },
            id,
            direction.as_str(),
            update.after,
            goal.target()
        );
        Ok(update)
    }

    /// Strict form of [`GoalStore::rename`].
    ///
    /// # Errors
    /// - `NotFound` when no goal has `id`.
    pub fn try_rename(&mut self, id: &GoalId, new_title: impl Into<String>) -> GoalResult<()> {
        let goal = self.goal_mut(id)?;
        let new_title = new_title.into();
        let title_len = new_title.chars().count();
        goal.set_title(new_title);

        info!("event=goal_rename module=store status=ok goal_id={id} title_len={title_len}");
        Ok(())
    }

    /// Strict form of [`GoalStore::remove`]; returns the removed goal.
    ///
    /// # Errors
    /// - `NotFound` when no goal has `id`.
    pub fn try_remove(&mut self, id: &GoalId) -> GoalResult<Goal> {
        let index = self
            .position(id)
            .ok_or_else(|| GoalError::NotFound(id.clone()))?;
        let removed = self.goals.remove(index);

        info!(
            "event=goal_remove module=store status=ok goal_id={} count={}",
            id,
            self.goals.len()
        );
        Ok(removed)
    }

    fn position(&self, id: &GoalId) -> Option<usize> {
        self.goals.iter().position(|goal| goal.id() == id)
    }

    fn goal_mut(&mut self, id: &GoalId) -> GoalResult<&mut Goal> {
        self.goals
            .iter_mut()
            .find(|goal| goal.id() == id)
            .ok_or_else(|| GoalError::NotFound(id.clone()))
    }

    fn fresh_id(&mut self) -> GoalResult<GoalId> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.contains(&id) {
                return Ok(id);
            }
            warn!("event=goal_id_collision module=store status=retry goal_id={id} attempt={attempt}");
        }
        Err(GoalError::IdCollision {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
