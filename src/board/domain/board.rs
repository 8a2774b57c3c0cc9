//! The task board aggregate and its assignment index.

use super::{AgentName, Task, TaskKey, TaskStatus};
use std::collections::{BTreeMap, HashMap};

/// Agent name to the ordered list of keys that agent was assigned.
///
/// Entries are append-only for the lifetime of a board and keep duplicates.
pub type AssignmentIndex = BTreeMap<AgentName, Vec<TaskKey>>;

/// Outcome of a board mutation addressed by key.
///
/// Unknown keys are never an error: the mutation is skipped and reported as
/// [`BoardUpdate::Ignored`] so one stale reference cannot halt the pipeline.
#[must_use = "callers should check whether the update touched a task"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardUpdate {
    /// The key was found and the task was updated.
    Applied,
    /// The key is not on the board; nothing changed.
    Ignored,
}

impl BoardUpdate {
    /// Returns `true` when the task was updated.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Ordered collection of tasks plus the assignment index.
///
/// Iteration always follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    positions: HashMap<TaskKey, usize>,
    assignments: AssignmentIndex,
}

impl TaskBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a task on the board.
    ///
    /// A task whose key already exists replaces the earlier one in place,
    /// keeping its original position; the replaced task is returned.
    pub fn insert(&mut self, task: Task) -> Option<Task> {
        if let Some(slot) = self
            .positions
            .get(task.key())
            .and_then(|position| self.tasks.get_mut(*position))
        {
            return Some(std::mem::replace(slot, task));
        }
        self.positions.insert(task.key().clone(), self.tasks.len());
        self.tasks.push(task);
        None
    }

    /// Returns the task stored under `key`.
    #[must_use]
    pub fn get(&self, key: &TaskKey) -> Option<&Task> {
        self.positions
            .get(key)
            .and_then(|position| self.tasks.get(*position))
    }

    fn get_mut(&mut self, key: &TaskKey) -> Option<&mut Task> {
        self.positions
            .get(key)
            .and_then(|position| self.tasks.get_mut(*position))
    }

    /// Iterates over every task in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the assignment index.
    #[must_use]
    pub const fn assignments(&self) -> &AssignmentIndex {
        &self.assignments
    }

    /// Returns every key whose status is not terminal, in insertion order.
    #[must_use]
    pub fn pending_keys(&self) -> Vec<TaskKey> {
        self.keys_where(|task| !task.status().is_terminal())
    }

    /// Returns every key whose status is one of `statuses`, in insertion order.
    #[must_use]
    pub fn keys_with_status(&self, statuses: &[TaskStatus]) -> Vec<TaskKey> {
        self.keys_where(|task| statuses.contains(&task.status()))
    }

    /// Returns every key matching `predicate`, in insertion order.
    pub fn keys_where(&self, predicate: impl Fn(&Task) -> bool) -> Vec<TaskKey> {
        self.tasks
            .iter()
            .filter(|task| predicate(task))
            .map(|task| task.key().clone())
            .collect()
    }

    /// Assigns a task to `owner`.
    ///
    /// Sets the owner, forces the status to [`TaskStatus::Assigned`] and
    /// appends the key to the owner's index entry. Calling it twice appends
    /// the key twice.
    pub fn assign(&mut self, key: &TaskKey, owner: AgentName) -> BoardUpdate {
        let Some(task) = self.get_mut(key) else {
            tracing::debug!(%key, %owner, "ignoring assignment for unknown task");
            return BoardUpdate::Ignored;
        };
        task.assign_to(owner.clone());
        self.assignments.entry(owner).or_default().push(key.clone());
        BoardUpdate::Applied
    }

    /// Overwrites the status of a task without validating the transition.
    pub fn set_status(&mut self, key: &TaskKey, status: TaskStatus) -> BoardUpdate {
        let Some(task) = self.get_mut(key) else {
            tracing::debug!(%key, %status, "ignoring status update for unknown task");
            return BoardUpdate::Ignored;
        };
        task.set_status(status);
        BoardUpdate::Applied
    }

    /// Returns the keys assigned to `owner`, or an empty slice.
    #[must_use]
    pub fn keys_for_owner(&self, owner: &AgentName) -> &[TaskKey] {
        self.assignments
            .get(owner)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the keys in `section` whose description mentions "test".
    ///
    /// These tasks gate the release of every other task in the section.
    #[must_use]
    pub fn dependencies_of(&self, section: &str) -> Vec<TaskKey> {
        self.keys_where(|task| {
            task.section() == section && task.description().to_lowercase().contains("test")
        })
    }

    /// Returns `true` when no task remains in a non-terminal status.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.tasks.iter().all(|task| task.status().is_terminal())
    }
}

impl FromIterator<Task> for TaskBoard {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut board = Self::new();
        for task in iter {
            board.insert(task);
        }
        board
    }
}
