//! Unit tests for the collaboration pipeline.

mod routing_tests;

use crate::board::domain::{Task, TaskBoard};
use crate::pipeline::domain::CollaborationContext;

/// Builds a context over `tasks` with an empty directory snapshot.
fn context_with(tasks: impl IntoIterator<Item = Task>) -> CollaborationContext {
    CollaborationContext::new(Vec::new(), tasks.into_iter().collect::<TaskBoard>())
}
