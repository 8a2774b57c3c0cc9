//! Domain model for the task board.
//!
//! Tasks are created once from the checklist document and afterwards only
//! change owner and status. All filesystem concerns stay outside of this
//! boundary.

mod board;
mod error;
mod outline;
mod task;

pub use board::{AssignmentIndex, BoardUpdate, TaskBoard};
pub use error::ParseTaskStatusError;
pub use outline::{CHECKLIST_MARKER, HEADING_MARKER, parse_outline};
pub use task::{AgentName, DEFAULT_SECTION, SYSTEM_SECTION, Task, TaskKey, TaskRecord, TaskStatus};
