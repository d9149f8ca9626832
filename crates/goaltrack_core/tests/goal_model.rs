use goaltrack_core::{Goal, GoalId, GoalStore, GoalValidationError, ProgressDirection};

#[test]
fn goal_new_sets_defaults() {
    let goal = Goal::new(GoalId::new("goal-7"), "Learn Rust", 12).unwrap();

    assert_eq!(goal.id().as_str(), "goal-7");
    assert_eq!(goal.title(), "Learn Rust");
    assert_eq!(goal.target(), 12);
    assert_eq!(goal.current(), 0);
    assert!(!goal.is_complete());
    assert_eq!(goal.progress_ratio(), 0.0);
}

#[test]
fn goal_serialization_uses_expected_wire_fields() {
    let mut store = GoalStore::new();
    let id = store.create("Drink water", "8").unwrap();
    store.adjust_progress(&id, ProgressDirection::Increase);
    let goal = store.get(&id).unwrap().clone();

    let json = serde_json::to_value(&goal).unwrap();
    assert_eq!(json["id"], "goal-1");
    assert_eq!(json["title"], "Drink water");
    assert_eq!(json["target"], 8);
    assert_eq!(json["current"], 1);

    let decoded: Goal = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, goal);
}

#[test]
fn deserialize_rejects_progress_above_target() {
    let value = serde_json::json!({
        "id": "goal-1",
        "title": "overflow",
        "target": 2,
        "current": 3
    });

    let err = serde_json::from_value::<Goal>(value).unwrap_err();
    assert!(
        err.to_string().contains("current (3) must be <= target (2)"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_zero_target() {
    let value = serde_json::json!({
        "id": "goal-1",
        "title": "empty",
        "target": 0,
        "current": 0
    });

    let err = serde_json::from_value::<Goal>(value).unwrap_err();
    assert!(err.to_string().contains("at least 1"), "unexpected error: {err}");
}

#[test]
fn goal_new_rejects_zero_target() {
    let err = Goal::new(GoalId::new("goal-1"), "x", 0).unwrap_err();
    assert_eq!(err, GoalValidationError::ZeroTarget);
}
