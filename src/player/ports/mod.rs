//! Port contracts for the player module.

pub mod attempts;
pub mod repository;

pub use attempts::{AttemptLog, AttemptLogError, AttemptLogResult};
pub use repository::{PlayerRepository, PlayerStoreError, PlayerStoreResult};
