//! Roles that validate and ship finished work.

use super::{Role, advance_all};
use crate::board::domain::{TaskBoard, TaskKey, TaskStatus};
use crate::pipeline::domain::{CollaborationContext, RoleId};

/// Validates every task that is ready for QA.
#[derive(Debug, Clone, Copy, Default)]
pub struct QaAgent;

impl Role for QaAgent {
    fn id(&self) -> RoleId {
        RoleId::Qa
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let recipient = self.id().successor();
        let ready = context.board().keys_with_status(&[TaskStatus::ReadyForQa]);
        let validated = advance_all(context.board_mut(), &ready, TaskStatus::Done);
        if validated.is_empty() {
            return format!("{recipient}, nothing new came through QA. Standing by.");
        }
        format!(
            "{recipient}, QA approved ({}). Prepare the production packages.",
            validated.join("; ")
        )
    }
}

/// Result of trying to release one task.
enum ReleaseOutcome {
    Released(String),
    Blocked(String),
}

/// Releases owned tasks once every test task in their section is done.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseEngineer;

impl ReleaseEngineer {
    /// Returns `true` when every gating test task in `section` is done.
    fn dependencies_done(board: &TaskBoard, section: &str) -> bool {
        board.dependencies_of(section).iter().all(|dependency| {
            board
                .get(dependency)
                .is_some_and(|task| task.status() == TaskStatus::Done)
        })
    }

    fn try_release(board: &mut TaskBoard, key: &TaskKey) -> Option<ReleaseOutcome> {
        let (section, summary) = board
            .get(key)
            .map(|task| (task.section().to_owned(), task.summary()))?;
        if !Self::dependencies_done(board, &section) {
            return Some(ReleaseOutcome::Blocked(format!(
                "{section} → waiting on tests"
            )));
        }
        board
            .set_status(key, TaskStatus::Released)
            .is_applied()
            .then_some(ReleaseOutcome::Released(summary))
    }
}

impl Role for ReleaseEngineer {
    fn id(&self) -> RoleId {
        RoleId::Release
    }

    fn perform(&self, context: &mut CollaborationContext) -> String {
        let recipient = self.id().successor();
        let keys = context
            .board()
            .keys_for_owner(&self.id().agent_name())
            .to_vec();
        if keys.is_empty() {
            return format!(
                "{recipient}, no deployments are queued. Record the current status anyway."
            );
        }

        let mut released = Vec::new();
        let mut blocked = Vec::new();
        for key in &keys {
            match Self::try_release(context.board_mut(), key) {
                Some(ReleaseOutcome::Released(summary)) => released.push(summary),
                Some(ReleaseOutcome::Blocked(reason)) => blocked.push(reason),
                None => {}
            }
        }

        if !blocked.is_empty() {
            tracing::info!(blocked = blocked.len(), "release gated on unfinished tests");
            return format!(
                "{recipient}, deployments partially blocked ({}). Recording interim notes.",
                blocked.join("; ")
            );
        }
        format!(
            "{recipient}, production artifacts packaged ({}). Update the changelog.",
            released.join("; ")
        )
    }
}
