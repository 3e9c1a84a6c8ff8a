//! Task handout and answer evaluation workflow for Quizdrop.
//!
//! This module orchestrates the other two contexts: it decides which task
//! a player may receive, judges submitted answers, and exposes the
//! roster-gated administrative surface (task curation, player oversight,
//! permission grants, forced assignment). The module follows hexagonal
//! architecture:
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
