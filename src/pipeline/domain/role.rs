//! Identities of the nine pipeline roles.

use crate::board::domain::AgentName;
use serde::{Serialize, Serializer};
use std::fmt;

/// One of the nine fixed pipeline participants.
///
/// Each role hands off to exactly one successor, forming a closed cycle:
/// Lead Architect → Architect → Backend → Frontend → Optimization → QA →
/// Release → Documentation → Review → Lead Architect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoleId {
    /// Briefs the architect on the workspace and the open workload.
    LeadArchitect,
    /// Routes pending tasks to owners.
    Architect,
    /// Prepares backend tasks for QA.
    Backend,
    /// Verifies UI tasks.
    Frontend,
    /// Looks for tasks that lost their owner.
    Optimization,
    /// Validates tasks that are ready for QA.
    Qa,
    /// Releases deploy tasks once their section's tests are done.
    Release,
    /// Lists everything that reached a terminal status.
    Documentation,
    /// Decides whether another cycle is needed.
    Review,
}

impl RoleId {
    /// Every role, in execution order.
    pub const PIPELINE: [Self; 9] = [
        Self::LeadArchitect,
        Self::Architect,
        Self::Backend,
        Self::Frontend,
        Self::Optimization,
        Self::Qa,
        Self::Release,
        Self::Documentation,
        Self::Review,
    ];

    /// Returns the display name, which doubles as the board owner name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LeadArchitect => "Lead Architect",
            Self::Architect => "Architect",
            Self::Backend => "Backend Agent",
            Self::Frontend => "Frontend Agent",
            Self::Optimization => "Optimization Agent",
            Self::Qa => "QA Agent",
            Self::Release => "Release Engineer",
            Self::Documentation => "Documentation Agent",
            Self::Review => "Review Architect",
        }
    }

    /// Returns the role this role hands off to.
    #[must_use]
    pub const fn successor(self) -> Self {
        match self {
            Self::LeadArchitect => Self::Architect,
            Self::Architect => Self::Backend,
            Self::Backend => Self::Frontend,
            Self::Frontend => Self::Optimization,
            Self::Optimization => Self::Qa,
            Self::Qa => Self::Release,
            Self::Release => Self::Documentation,
            Self::Documentation => Self::Review,
            Self::Review => Self::LeadArchitect,
        }
    }

    /// Returns the owner name used on the task board.
    #[must_use]
    pub fn agent_name(self) -> AgentName {
        AgentName::new(self.display_name())
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for RoleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}
