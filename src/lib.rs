//! Atelier: round-robin task board and role pipeline.
//!
//! This crate loads a heading-structured checklist into a task board and runs
//! a fixed chain of nine roles over it, once per cycle, until every task has
//! reached a terminal status or the cycle budget is spent. Each role leaves a
//! handoff note for its successor, and the ordered note log is the run's
//! transcript.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board and pipeline logic with no filesystem access
//! - **Ports**: Abstract trait interfaces for the workspace being scanned
//! - **Adapters**: Concrete workspace implementations (capability-scoped
//!   filesystem, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Task records, the assignment index and checklist loading
//! - [`pipeline`]: Roles, routing and the round-robin dispatcher
//! - [`report`]: Transcript and JSON rendering of a finished run
//! - [`config`]: Validated run settings
//! - [`telemetry`]: Tracing subscriber initialisation

pub mod board;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod telemetry;
