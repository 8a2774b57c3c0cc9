//! Task records and the identifiers used to look them up.

use super::ParseTaskStatusError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Section assigned to tasks that appear before the first heading.
pub const DEFAULT_SECTION: &str = "General";

/// Section reserved for diagnostics raised while loading the board.
pub const SYSTEM_SECTION: &str = "System";

/// Task lifecycle status.
///
/// Under normal flow a task moves `Pending → Assigned → ReadyForQa → Done`,
/// and tasks owned by the release role may jump to `Released`. The board does
/// not enforce these edges; roles only touch the tasks they own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been loaded but nobody owns it yet.
    #[default]
    Pending,
    /// Task has an owner and is waiting for that owner to act.
    Assigned,
    /// Task implementation is finished and awaits QA.
    ReadyForQa,
    /// Task has been verified.
    Done,
    /// Task has shipped through the release role.
    Released,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Assigned,
        Self::ReadyForQa,
        Self::Done,
        Self::Released,
    ];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::ReadyForQa => "ready-for-qa",
            Self::Done => "done",
            Self::Released => "released",
        }
    }

    /// Returns `true` when no role will advance the task any further.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Released)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "ready-for-qa" => Ok(Self::ReadyForQa),
            "done" => Ok(Self::Done),
            "released" => Ok(Self::Released),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique task identity: the section heading plus the checklist text.
///
/// Rendered as `"{section} :: {description}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskKey {
    section: String,
    description: String,
}

impl TaskKey {
    /// Creates a key from its two parts.
    #[must_use]
    pub fn new(section: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            description: description.into(),
        }
    }

    /// Returns the section the task belongs to.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the checklist text of the task.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.section, self.description)
    }
}

impl Serialize for TaskKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Display name of the agent responsible for a task (e.g. `Backend Agent`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AgentName(String);

impl AgentName {
    /// Creates an agent name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the agent name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for AgentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single checklist item tracked on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    key: TaskKey,
    owner: Option<AgentName>,
    status: TaskStatus,
}

/// Parameter object for building a task in an arbitrary state.
///
/// Used to seed boards directly, bypassing assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Section heading.
    pub section: String,
    /// Checklist text.
    pub description: String,
    /// Responsible agent, if any.
    pub owner: Option<AgentName>,
    /// Lifecycle status.
    pub status: TaskStatus,
}

impl Task {
    /// Creates an unowned, pending task.
    #[must_use]
    pub fn new(section: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: TaskKey::new(section, description),
            owner: None,
            status: TaskStatus::Pending,
        }
    }

    /// Builds a task from explicit parts.
    #[must_use]
    pub fn from_record(record: TaskRecord) -> Self {
        Self {
            key: TaskKey::new(record.section, record.description),
            owner: record.owner,
            status: record.status,
        }
    }

    /// Returns the task key.
    #[must_use]
    pub const fn key(&self) -> &TaskKey {
        &self.key
    }

    /// Returns the section the task belongs to.
    #[must_use]
    pub fn section(&self) -> &str {
        self.key.section()
    }

    /// Returns the checklist text.
    #[must_use]
    pub fn description(&self) -> &str {
        self.key.description()
    }

    /// Returns the responsible agent, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<&AgentName> {
        self.owner.as_ref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Renders the task as `section → description` for handoff notes.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} → {}", self.section(), self.description())
    }

    pub(crate) fn assign_to(&mut self, owner: AgentName) {
        self.owner = Some(owner);
        self.status = TaskStatus::Assigned;
    }

    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
