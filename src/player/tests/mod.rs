//! Unit tests for the player module.
//!
//! Tests are organised by concern: progression state machine rules,
//! aggregate and identity behaviour, and roster service orchestration over
//! the in-memory adapters.

mod domain_tests;
mod roster_tests;
