//! Roles that report on the state of the board at the end of a cycle.

use super::{Role, join_keys};
use crate::board::domain::TaskStatus;
use crate::pipeline::domain::{CollaborationContext, RoleId};

/// Lists every task that reached a terminal status.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentationAgent;

impl Role for DocumentationAgent {
    fn id(&self) -> RoleId {
        RoleId::Documentation
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let recipient = self.id().successor();
        let completed = context
            .board()
            .keys_with_status(&[TaskStatus::Done, TaskStatus::Released]);
        if completed.is_empty() {
            return format!("{recipient}, nothing to document until something ships.");
        }
        format!(
            "{recipient}, release notes drafted for {}. Please run the final approval.",
            join_keys(&completed, "; ")
        )
    }
}

/// Decides whether the pipeline needs another cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewArchitect;

impl Role for ReviewArchitect {
    fn id(&self) -> RoleId {
        RoleId::Review
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let recipient = self.id().successor();
        let remaining = context.board().pending_keys();
        if remaining.is_empty() {
            return format!("{recipient}, every task converged. The run can be archived.");
        }
        format!(
            "{recipient}, outstanding items remain ({}). Starting another cycle.",
            join_keys(&remaining, "; ")
        )
    }
}
