//! Task bank management for Quizdrop.
//!
//! This module owns the quiz tasks administrators curate: creation,
//! field-level revision, activation toggling, and the answer key each task
//! carries. Answer normalization lives here so the evaluation workflow and
//! the administrative surface agree on what counts as a correct answer.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
