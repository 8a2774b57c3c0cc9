//! Round-robin dispatcher: runs every role once per cycle.

use crate::pipeline::domain::CollaborationContext;
use crate::pipeline::roles::{Role, execute_role, standard_roles};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;

/// Number of full cycles a run may execute; never less than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CycleBudget(u32);

impl CycleBudget {
    /// Budget used when none is configured.
    pub const DEFAULT: Self = Self(2);

    /// Creates a budget, clamping values below one up to one.
    #[must_use]
    pub fn new(requested: i64) -> Self {
        Self(u32::try_from(requested.max(1)).unwrap_or(u32::MAX))
    }

    /// Returns the number of cycles.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for CycleBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of a dispatcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Full cycles executed before stopping.
    pub cycles_completed: u32,
    /// Whether every task reached a terminal status.
    pub converged: bool,
    /// Length of the note log at the end of the run.
    pub notes_recorded: usize,
}

/// Executes a fixed list of roles in order, once per cycle.
pub struct RoundRobinDispatcher<C>
where
    C: Clock,
{
    roles: Vec<Box<dyn Role>>,
    clock: Arc<C>,
}

impl<C> RoundRobinDispatcher<C>
where
    C: Clock,
{
    /// Creates a dispatcher running the nine standard roles.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_roles(standard_roles(), clock)
    }

    /// Creates a dispatcher running `roles` in the given order.
    #[must_use]
    pub const fn with_roles(roles: Vec<Box<dyn Role>>, clock: Arc<C>) -> Self {
        Self { roles, clock }
    }

    /// Returns the number of roles executed per cycle.
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Runs up to `budget` cycles, stopping after the first full cycle that
    /// leaves the board converged.
    pub fn run(&self, context: &mut CollaborationContext, budget: CycleBudget) -> RunSummary {
        let _run_span = tracing::info_span!(
            "round_robin",
            run_id = %context.run_id(),
            budget = budget.get()
        )
        .entered();

        let mut cycles_completed = 0;
        for cycle in 1..=budget.get() {
            let _cycle_span = tracing::debug_span!("cycle", cycle).entered();
            for role in &self.roles {
                execute_role(role.as_ref(), context, cycle, &*self.clock);
            }
            cycles_completed = cycle;
            if context.board().is_converged() {
                tracing::info!(cycle, "board converged");
                break;
            }
        }

        let summary = RunSummary {
            cycles_completed,
            converged: context.board().is_converged(),
            notes_recorded: context.notes().len(),
        };
        tracing::info!(
            cycles = summary.cycles_completed,
            converged = summary.converged,
            notes = summary.notes_recorded,
            "round-robin run finished"
        );
        summary
    }
}
