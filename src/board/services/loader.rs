//! Service layer that turns a workspace into a board and directory snapshot.
//!
//! Neither function fails: anomalies are folded into the returned data so the
//! pipeline still runs and the problem shows up in the final report.

use crate::board::{
    domain::{SYSTEM_SECTION, Task, TaskBoard, parse_outline},
    ports::Workspace,
};

/// Loads the board from `document` inside `workspace`.
///
/// A missing document yields an empty board. Any other read failure yields
/// a board holding a single pending task in the [`SYSTEM_SECTION`] that
/// describes the failure.
#[must_use]
pub fn load_board<W>(workspace: &W, document: &str) -> TaskBoard
where
    W: Workspace + ?Sized,
{
    match workspace.read_document(document) {
        Ok(Some(contents)) => {
            let board = parse_outline(&contents);
            tracing::info!(document, tasks = board.len(), "loaded task board");
            board
        }
        Ok(None) => {
            tracing::info!(document, "task document not found; starting with an empty board");
            TaskBoard::new()
        }
        Err(err) => {
            tracing::warn!(document, error = %err, "task document unreadable");
            let description = format!("Failed to read {document} ({})", err.io_error());
            std::iter::once(Task::new(SYSTEM_SECTION, description)).collect()
        }
    }
}

/// Returns the sorted top-level directory names of `workspace`.
///
/// A failed scan yields a single `Scan failed: ...` entry instead.
#[must_use]
pub fn scan_directories<W>(workspace: &W) -> Vec<String>
where
    W: Workspace + ?Sized,
{
    match workspace.top_level_directories() {
        Ok(mut names) => {
            names.sort();
            names
        }
        Err(err) => {
            tracing::warn!(error = %err, "workspace scan failed");
            vec![format!("Scan failed: {}", err.io_error())]
        }
    }
}
