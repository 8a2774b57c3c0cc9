//! Adapter implementations for the board ports.

pub mod filesystem;
pub mod memory;
