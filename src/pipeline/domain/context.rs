//! The aggregate every role reads and writes during a run.

use super::{AgentNote, RunId};
use crate::board::domain::TaskBoard;

/// Shared state of one collaboration run.
///
/// Built once per run and passed by mutable reference to each role in turn.
/// The note log only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationContext {
    run_id: RunId,
    directories: Vec<String>,
    board: TaskBoard,
    notes: Vec<AgentNote>,
}

impl CollaborationContext {
    /// Creates a context from a directory snapshot and a loaded board.
    #[must_use]
    pub fn new(directories: Vec<String>, board: TaskBoard) -> Self {
        Self {
            run_id: RunId::new(),
            directories,
            board,
            notes: Vec::new(),
        }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Returns the top-level directory snapshot.
    #[must_use]
    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    /// Returns the task board.
    #[must_use]
    pub const fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Returns the task board for mutation.
    pub const fn board_mut(&mut self) -> &mut TaskBoard {
        &mut self.board
    }

    /// Returns the note log in send order.
    #[must_use]
    pub fn notes(&self) -> &[AgentNote] {
        &self.notes
    }

    pub(crate) fn record_note(&mut self, note: AgentNote) {
        self.notes.push(note);
    }
}
