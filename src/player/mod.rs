//! Player progression tracking for Quizdrop.
//!
//! This module owns the per-player state: chat identity, score, the
//! three-state progression machine governing task requests, and the
//! immutable attempt history answers are judged into. Solving a task
//! always parks the player in the blocked state; only an administrator
//! action releases them. The module follows hexagonal architecture:
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
