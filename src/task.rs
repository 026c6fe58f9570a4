//! Task store for todo.
//!
//! The store is an ordered collection of tasks. Identifiers are assigned as
//! max-existing-plus-one, so a deleted task's identifier is never reused and
//! never collides with a still-present one. Display positions (1-based, as
//! shown by `list`) diverge from identifiers once anything is deleted, so
//! completion and deletion are keyed by identifier and position-based callers
//! must resolve through [`TaskStore::id_at_position`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// A single task entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, unique within the store, never reused
    pub id: u64,
    /// Description text as entered by the user
    pub description: String,
    /// Completion flag, false at creation
    pub completed: bool,
}

/// Ordered collection of tasks, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStore {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
}

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier: one greater than the maximum currently present.
    ///
    /// Computed over current tasks only, so identifiers of deleted tasks are
    /// never handed out again. Length-based assignment would reuse them.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    /// Append a new task with the given description and return it.
    ///
    /// The store accepts any description, including an empty one; content
    /// validation belongs to the caller.
    pub fn add(&mut self, description: impl Into<String>) -> Task {
        let task = Task {
            id: self.next_id(),
            description: description.into(),
            completed: false,
        };
        debug!(id = task.id, "adding task");
        self.tasks.push(task.clone());
        task
    }

    /// All tasks in insertion order, as a read-only view
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently in the store
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by identifier
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Mark the task with the given identifier as completed.
    ///
    /// Idempotent: completing an already-completed task succeeds silently.
    pub fn complete(&mut self, id: u64) -> Result<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        debug!(id, "completing task");
        task.completed = true;
        Ok(task)
    }

    /// Remove the task with the given identifier and return it.
    ///
    /// Remaining tasks keep their identifiers and relative order.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        debug!(id, "deleting task");
        Ok(self.tasks.remove(idx))
    }

    /// Resolve a 1-based display position to the task identifier at that
    /// position in the current list order.
    ///
    /// Users reason about "item 3 in the list I just saw"; identifiers and
    /// positions diverge once any deletion has occurred, so every
    /// position-based command goes through this helper.
    pub fn id_at_position(&self, position: usize) -> Result<u64> {
        if position < 1 || position > self.tasks.len() {
            return Err(Error::OutOfRange {
                position,
                count: self.tasks.len(),
            });
        }
        Ok(self.tasks[position - 1].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_sequential_ids_from_one() {
        let mut store = TaskStore::new();
        let first = store.add("buy milk");
        let second = store.add("call mom");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.completed);
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[1].description, "call mom");
    }

    #[test]
    fn add_never_reuses_deleted_ids() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");
        store.add("c");

        store.delete(3).unwrap();
        let replacement = store.add("d");
        assert_eq!(replacement.id, 4);

        store.delete(1).unwrap();
        let another = store.add("e");
        assert_eq!(another.id, 5);

        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4, 5]);
    }

    #[test]
    fn complete_sets_flag_and_is_idempotent() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");

        store.complete(1).unwrap();
        assert!(store.get(1).unwrap().completed);
        assert!(!store.get(2).unwrap().completed);

        // Completing again is not an error
        store.complete(1).unwrap();
        assert!(store.get(1).unwrap().completed);
    }

    #[test]
    fn complete_unknown_id_is_not_found() {
        let mut store = TaskStore::new();
        store.add("a");

        let err = store.complete(42).unwrap_err();
        assert!(matches!(err, Error::NotFound(42)));
        assert!(!store.get(1).unwrap().completed);
    }

    #[test]
    fn delete_preserves_order_of_remaining_tasks() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");
        store.add("c");

        let removed = store.delete(2).unwrap();
        assert_eq!(removed.description, "b");

        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_unknown_id_leaves_store_unchanged() {
        let mut store = TaskStore::new();
        store.add("a");

        let err = store.delete(7).unwrap_err();
        assert!(matches!(err, Error::NotFound(7)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn position_resolves_to_id_after_deletions() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");
        store.add("c");
        store.delete(1).unwrap();

        // Position 1 is now the task with id 2
        assert_eq!(store.id_at_position(1).unwrap(), 2);
        assert_eq!(store.id_at_position(2).unwrap(), 3);
    }

    #[test]
    fn position_outside_range_is_rejected() {
        let mut store = TaskStore::new();
        store.add("a");

        assert!(matches!(
            store.id_at_position(0),
            Err(Error::OutOfRange { position: 0, count: 1 })
        ));
        assert!(matches!(
            store.id_at_position(2),
            Err(Error::OutOfRange { position: 2, count: 1 })
        ));
        assert!(matches!(
            TaskStore::new().id_at_position(1),
            Err(Error::OutOfRange { position: 1, count: 0 })
        ));
    }

    #[test]
    fn scenario_add_complete_delete_readd() {
        let mut store = TaskStore::new();

        let milk = store.add("buy milk");
        assert_eq!(milk.id, 1);
        assert_eq!(store.list().len(), 1);
        assert!(!store.list()[0].completed);

        let mom = store.add("call mom");
        assert_eq!(mom.id, 2);
        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);

        store.complete(1).unwrap();
        assert!(store.get(1).unwrap().completed);
        assert!(!store.get(2).unwrap().completed);

        store.delete(1).unwrap();
        assert_eq!(store.len(), 1);
        let remaining = &store.list()[0];
        assert_eq!(remaining.id, 2);
        assert_eq!(remaining.description, "call mom");
        assert!(!remaining.completed);

        let bills = store.add("pay bills");
        assert_eq!(bills.id, 3);
    }
}
