//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `goaltrack_core` linkage without the mobile shell.
//! - Walk one goal through its lifecycle with deterministic output.

use goaltrack_core::{GoalStore, ProgressDirection};

fn main() {
    println!("goaltrack_core ping={}", goaltrack_core::ping());
    println!("goaltrack_core version={}", goaltrack_core::core_version());

    let mut store = GoalStore::new();
    let Some(id) = store.create("Read books", "3") else {
        eprintln!("demo goal was rejected");
        std::process::exit(1);
    };
    for _ in 0..5 {
        store.adjust_progress(&id, ProgressDirection::Increase);
    }
    store.rename(&id, "Read more books");

    for goal in store.goals() {
        println!(
            "goal id={} title=\"{}\" progress={} complete={}",
            goal.id(),
            goal.title(),
            goal.progress_label(),
            goal.is_complete()
        );
    }

    store.remove(&id);
    println!("goals remaining={}", store.len());
}
