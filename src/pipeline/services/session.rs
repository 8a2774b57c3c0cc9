//! Entry point that loads a workspace and runs the pipeline over it.

use super::{CycleBudget, RoundRobinDispatcher, RunSummary};
use crate::board::{
    ports::Workspace,
    services::{load_board, scan_directories},
};
use crate::pipeline::domain::CollaborationContext;
use mockable::Clock;
use std::sync::Arc;

/// Final state of a run together with its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationRun {
    /// Context after the last executed cycle.
    pub context: CollaborationContext,
    /// Cycle count and convergence outcome.
    pub summary: RunSummary,
}

/// Builds a fresh context from `workspace` and its checklist `document`.
#[must_use]
pub fn load_context<W>(workspace: &W, document: &str) -> CollaborationContext
where
    W: Workspace + ?Sized,
{
    CollaborationContext::new(scan_directories(workspace), load_board(workspace, document))
}

/// Loads `document` from `workspace` and runs the standard pipeline for up
/// to `budget` cycles.
#[must_use]
pub fn run_round_robin<W, C>(
    workspace: &W,
    document: &str,
    budget: CycleBudget,
    clock: Arc<C>,
) -> CollaborationRun
where
    W: Workspace + ?Sized,
    C: Clock,
{
    let mut context = load_context(workspace, document);
    let summary = RoundRobinDispatcher::new(clock).run(&mut context, budget);
    CollaborationRun { context, summary }
}
