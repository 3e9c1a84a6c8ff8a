//! Quizdrop: conversational task-distribution core.
//!
//! This crate provides the core workflow for handing quiz-style tasks to
//! chat users, judging their free-text answers, tracking scores, and giving
//! administrators control over the task bank and per-player assignment.
//! The chat transport itself is an external collaborator reached through
//! ports.
//!
//! # Architecture
//!
//! Quizdrop follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`catalog`]: The task bank — quiz tasks, answer keys, admin CRUD
//! - [`player`]: Per-player progression, scores, and attempt history
//! - [`assignment`]: Task handout, answer evaluation, admin overrides
//! - [`config`]: Process configuration loaded from the environment

pub mod assignment;
pub mod catalog;
pub mod config;
pub mod player;
