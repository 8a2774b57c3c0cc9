//! Handoff notes exchanged between roles.

use super::RoleId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::fmt;

/// Immutable record of one role's output for its successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentNote {
    sender: RoleId,
    recipient: RoleId,
    cycle: u32,
    message: String,
    sent_at: DateTime<Utc>,
}

impl AgentNote {
    /// Creates a note stamped with the current time from `clock`.
    #[must_use]
    pub fn new(
        sender: RoleId,
        recipient: RoleId,
        cycle: u32,
        message: impl Into<String>,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            sender,
            recipient,
            cycle,
            message: message.into(),
            sent_at: clock.utc(),
        }
    }

    /// Returns the sending role.
    #[must_use]
    pub const fn sender(&self) -> RoleId {
        self.sender
    }

    /// Returns the receiving role.
    #[must_use]
    pub const fn recipient(&self) -> RoleId {
        self.recipient
    }

    /// Returns the 1-based cycle the note was sent in.
    #[must_use]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Returns the note body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when the note was sent.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}

impl fmt::Display for AgentNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}: {}", self.sender, self.recipient, self.message)
    }
}
