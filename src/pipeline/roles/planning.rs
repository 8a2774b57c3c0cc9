//! Roles that brief and decompose the workload.

use super::Role;
use crate::pipeline::domain::{CollaborationContext, RoleId, RoutingTable};

/// Number of directories named in the lead's briefing.
const DIRECTORY_PREVIEW_LIMIT: usize = 6;

/// Briefs the architect with the workspace layout and open workload.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadArchitect;

impl Role for LeadArchitect {
    fn id(&self) -> RoleId {
        RoleId::LeadArchitect
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let preview = directory_preview(context.directories());
        let pending = context.board().pending_keys().len();
        format!(
            "{}, the workspace scan shows {pending} pending items. \
             Top-level directories: {preview}. Break the workstream down.",
            self.id().successor()
        )
    }
}

fn directory_preview(directories: &[String]) -> String {
    if directories.is_empty() {
        return "none".to_owned();
    }
    let mut preview = directories
        .iter()
        .take(DIRECTORY_PREVIEW_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if directories.len() > DIRECTORY_PREVIEW_LIMIT {
        preview.push_str(", ...");
    }
    preview
}

/// Routes every pending task to an owning role.
#[derive(Debug, Clone, Default)]
pub struct Architect {
    routing: RoutingTable,
}

impl Architect {
    /// Creates an architect that routes with `routing`.
    #[must_use]
    pub const fn new(routing: RoutingTable) -> Self {
        Self { routing }
    }
}

impl Role for Architect {
    fn id(&self) -> RoleId {
        RoleId::Architect
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let mut dispatched = Vec::new();
        for key in context.board().pending_keys() {
            let owner = self.routing.route(key.description());
            if context
                .board_mut()
                .assign(&key, owner.agent_name())
                .is_applied()
            {
                dispatched.push(format!("{owner} ← {key}"));
            }
        }

        let recipient = self.id().successor();
        if dispatched.is_empty() {
            return format!(
                "{recipient}, nothing new to dispatch. Hold position until QA reports a regression."
            );
        }
        format!(
            "{recipient}, assignments dispatched ({}). Start execution and keep the chain moving.",
            dispatched.join("; ")
        )
    }
}
