//! Goal id generation strategies.

use crate::model::goal::GoalId;
use std::fmt::Debug;
use uuid::Uuid;

const SEQUENTIAL_PREFIX: &str = "goal";

/// Source of fresh goal ids for one store.
pub trait IdGenerator: Debug + Send {
    fn next_id(&mut self) -> GoalId;
}

/// Monotonic counter ids: `goal-1`, `goal-2`, ...
///
/// Ids are never handed out twice by the same generator, even after the
/// goal they named is removed.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> GoalId {
        self.issued += 1;
        GoalId::new(format!("{SEQUENTIAL_PREFIX}-{}", self.issued))
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> GoalId {
        GoalId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, RandomIds, SequentialIds};
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn sequential_ids_count_up_from_one() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "goal-1");
        assert_eq!(ids.next_id().as_str(), "goal-2");
    }

    #[test]
    fn random_ids_are_uuid_strings_and_distinct() {
        let mut ids = RandomIds;
        let issued = (0..64).map(|_| ids.next_id()).collect::<HashSet<_>>();
        assert_eq!(issued.len(), 64);
        for id in issued {
            assert!(Uuid::parse_str(id.as_str()).is_ok());
        }
    }
}
