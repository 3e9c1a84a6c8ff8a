//! Orchestration services for the player module.

mod roster;

pub use roster::{PlayerRosterService, PlayerStats, RosterServiceError, RosterServiceResult};
