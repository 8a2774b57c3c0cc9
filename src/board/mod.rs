//! Task board management for Atelier.
//!
//! The board holds every task parsed from the workspace checklist, keyed by
//! section and description, together with the per-agent assignment index.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Loading services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
