//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod workspace;

pub use workspace::{Workspace, WorkspaceError, WorkspaceResult};
