//! Error types for task board parsing.

use thiserror::Error;

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
