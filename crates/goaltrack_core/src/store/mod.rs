//! In-memory goal store.
//!
//! # Responsibility
//! - Own the ordered goal collection for the process lifetime.
//! - Provide the only sanctioned mutations over it.
//!
//! # Invariants
//! - Insertion order is preserved; removal never reorders survivors.
//! - No two goals share an id.
//! - Permissive operations never fail; strict `try_*` variants report why.

pub mod goal_store;
pub mod id_gen;
