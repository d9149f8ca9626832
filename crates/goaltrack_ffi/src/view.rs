//! Ephemeral form state for the goal screen.
//!
//! # Responsibility
//! - Hold draft text for the add and edit dialogs.
//! - Translate dialog submissions into store operations.
//!
//! # Invariants
//! - Drafts never live in the store; the store only sees submitted values.
//! - A failed add keeps its draft so the dialog can stay open.

use goaltrack_core::{Goal, GoalError, GoalId, GoalStore};

/// Draft for the "add goal" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddGoalForm {
    pub title: String,
    pub target_text: String,
}

impl AddGoalForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits the draft to `store`.
    ///
    /// On success the draft is cleared and the new id returned; the caller
    /// closes the dialog. On failure the draft is left as typed.
    pub fn submit(&mut self, store: &mut GoalStore) -> Result<GoalId, GoalError> {
        let id = store.try_create(self.title.clone(), self.target_text.as_str())?;
        self.title.clear();
        self.target_text.clear();
        Ok(id)
    }
}

/// Draft for the "edit goal" dialog, bound to one selected goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGoalForm {
    goal_id: GoalId,
    pub title: String,
}

impl EditGoalForm {
    /// Opens the dialog seeded with the selected goal's current title.
    pub fn open(goal: &Goal) -> Self {
        Self {
            goal_id: goal.id().clone(),
            title: goal.title().to_string(),
        }
    }

    pub fn goal_id(&self) -> &GoalId {
        &self.goal_id
    }

    /// Renames the selected goal to the draft title.
    pub fn save(self, store: &mut GoalStore) -> Result<(), GoalError> {
        store.try_rename(&self.goal_id, self.title)
    }

    /// Deletes the selected goal.
    pub fn delete(self, store: &mut GoalStore) -> Result<Goal, GoalError> {
        store.try_remove(&self.goal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddGoalForm, EditGoalForm};
    use goaltrack_core::{GoalError, GoalStore, ProgressDirection};

    #[test]
    fn add_form_clears_draft_on_success() {
        let mut store = GoalStore::new();
        let mut form = AddGoalForm {
            title: "Read books".to_string(),
            target_text: "10".to_string(),
        };

        let id = form.submit(&mut store).expect("valid draft");

        assert_eq!(form, AddGoalForm::new());
        assert_eq!(store.get(&id).map(|goal| goal.target()), Some(10));
    }

    #[test]
    fn add_form_keeps_draft_on_failure() {
        let mut store = GoalStore::new();
        let mut form = AddGoalForm {
            title: String::new(),
            target_text: "5".to_string(),
        };

        let err = form.submit(&mut store).unwrap_err();

        assert_eq!(err, GoalError::EmptyTitle);
        assert_eq!(form.target_text, "5");
        assert!(store.is_empty());
    }

    #[test]
    fn edit_form_saves_new_title_only() {
        let mut store = GoalStore::new();
        let id = store.create("Old", "3").unwrap();
        store.adjust_progress(&id, ProgressDirection::Increase);

        let mut form = EditGoalForm::open(store.get(&id).unwrap());
        assert_eq!(form.title, "Old");
        form.title = "New".to_string();
        form.save(&mut store).unwrap();

        let goal = store.get(&id).unwrap();
        assert_eq!(goal.title(), "New");
        assert_eq!(goal.current(), 1);
        assert_eq!(goal.target(), 3);
    }

    #[test]
    fn edit_form_delete_removes_selected_goal() {
        let mut store = GoalStore::new();
        let keep = store.create("Keep", "1").unwrap();
        let dropped = store.create("Drop", "1").unwrap();

        let form = EditGoalForm::open(store.get(&dropped).unwrap());
        form.delete(&mut store).unwrap();

        assert!(!store.contains(&dropped));
        assert!(store.contains(&keep));
    }

    #[test]
    fn edit_form_for_removed_goal_reports_not_found() {
        let mut store = GoalStore::new();
        let id = store.create("Gone", "1").unwrap();
        let form = EditGoalForm::open(store.get(&id).unwrap());
        store.remove(&id);

        assert_eq!(form.save(&mut store), Err(GoalError::NotFound(id)));
    }
}
