//! Role implementations and the shared note-recording wrapper.
//!
//! A role only decides what to do with the board and what to tell its
//! successor. Stamping, addressing and logging the note is done by
//! [`execute_role`], which every role goes through.

mod closing;
mod delivery;
mod planning;
mod release;

pub use closing::{DocumentationAgent, ReviewArchitect};
pub use delivery::{BackendAgent, FrontendAgent, OptimizationAgent};
pub use planning::{Architect, LeadArchitect};
pub use release::{QaAgent, ReleaseEngineer};

use crate::board::domain::{Task, TaskBoard, TaskKey, TaskStatus};
use crate::pipeline::domain::{AgentNote, CollaborationContext, RoleId};
use mockable::Clock;

/// Capability shared by every pipeline participant.
pub trait Role {
    /// Returns the identity of this role.
    fn id(&self) -> RoleId;

    /// Performs one turn against the shared context and returns the message
    /// for the successor role.
    fn perform(&self, context: &mut CollaborationContext) -> String;
}

/// Runs one turn of `role` and records the resulting note.
///
/// The note is addressed to the role's successor, stamped with `cycle` and
/// the current time, appended to the context log and returned.
pub fn execute_role<R, C>(
    role: &R,
    context: &mut CollaborationContext,
    cycle: u32,
    clock: &C,
) -> AgentNote
where
    R: Role + ?Sized,
    C: Clock + ?Sized,
{
    let sender = role.id();
    let message = role.perform(context);
    let note = AgentNote::new(sender, sender.successor(), cycle, message, clock);
    tracing::debug!(
        cycle,
        from = %note.sender(),
        to = %note.recipient(),
        "handoff note recorded"
    );
    context.record_note(note.clone());
    note
}

/// Returns the nine standard roles in execution order.
#[must_use]
pub fn standard_roles() -> Vec<Box<dyn Role>> {
    vec![
        Box::new(LeadArchitect),
        Box::new(Architect::default()),
        Box::new(BackendAgent),
        Box::new(FrontendAgent),
        Box::new(OptimizationAgent),
        Box::new(QaAgent),
        Box::new(ReleaseEngineer),
        Box::new(DocumentationAgent),
        Box::new(ReviewArchitect),
    ]
}

/// Moves every task in `keys` to `status` and returns their summaries.
fn advance_all(board: &mut TaskBoard, keys: &[TaskKey], status: TaskStatus) -> Vec<String> {
    let mut summaries = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(summary) = board.get(key).map(Task::summary) else {
            continue;
        };
        if board.set_status(key, status).is_applied() {
            summaries.push(summary);
        }
    }
    summaries
}

/// Joins keys with `separator` using their display form.
fn join_keys(keys: &[TaskKey], separator: &str) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
