//! Roles that carry out and police the assigned work.

use super::{Role, advance_all, join_keys};
use crate::board::domain::TaskStatus;
use crate::pipeline::domain::{CollaborationContext, RoleId};

/// Prepares every backend task for QA.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackendAgent;

impl Role for BackendAgent {
    fn id(&self) -> RoleId {
        RoleId::Backend
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let recipient = self.id().successor();
        let keys = context
            .board()
            .keys_for_owner(&self.id().agent_name())
            .to_vec();
        let prepared = advance_all(context.board_mut(), &keys, TaskStatus::ReadyForQa);
        if prepared.is_empty() {
            return format!(
                "{recipient}, the backend queue is empty. Carry on with any UI checks."
            );
        }
        format!(
            "{recipient}, backend work is ready for QA ({}). QA confirms after your pass.",
            prepared.join("; ")
        )
    }
}

/// Verifies UI tasks and closes them directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontendAgent;

impl Role for FrontendAgent {
    fn id(&self) -> RoleId {
        RoleId::Frontend
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let recipient = self.id().successor();
        let keys = context
            .board()
            .keys_for_owner(&self.id().agent_name())
            .to_vec();
        let verified = advance_all(context.board_mut(), &keys, TaskStatus::Done);
        if verified.is_empty() {
            return format!("{recipient}, the UI is unchanged. No components need attention.");
        }
        format!(
            "{recipient}, UI verification finished ({}). Performance review is next.",
            verified.join("; ")
        )
    }
}

/// Flags open tasks that have no owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizationAgent;

impl Role for OptimizationAgent {
    fn id(&self) -> RoleId {
        RoleId::Optimization
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let recipient = self.id().successor();
        let orphaned = context
            .board()
            .keys_where(|task| !task.status().is_terminal() && task.owner().is_none());
        if orphaned.is_empty() {
            return format!(
                "{recipient}, every open task has an owner and nothing is duplicated. \
                 Go ahead and validate the backend deliverables."
            );
        }
        format!(
            "{recipient}, found tasks without an owner ({}). Hold until they are reassigned.",
            join_keys(&orphaned, ", ")
        )
    }
}
