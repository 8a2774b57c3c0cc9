//! Round-robin collaboration pipeline.
//!
//! Nine roles run in a fixed order once per cycle over a shared
//! [`domain::CollaborationContext`]. Every role reads and updates the task
//! board and leaves one handoff note for its successor. The module layout
//! mirrors the board module:
//!
//! - Domain types in [`domain`]
//! - Role implementations in [`roles`]
//! - The dispatcher and run entry point in [`services`]

pub mod domain;
pub mod roles;
pub mod services;

#[cfg(test)]
mod tests;
