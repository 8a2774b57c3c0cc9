//! Application services that drive the pipeline.

mod dispatcher;
mod session;

pub use dispatcher::{CycleBudget, RoundRobinDispatcher, RunSummary};
pub use session::{CollaborationRun, load_context, run_round_robin};
