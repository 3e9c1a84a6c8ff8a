//! Domain model for player progression.
//!
//! The player domain models chat users, their scores, the progression
//! state machine controlling task requests, and immutable attempt records,
//! keeping all infrastructure concerns outside of the domain boundary.

mod attempt;
mod error;
mod identity;
mod ids;
mod player;
mod progression;

pub use attempt::{Attempt, PersistedAttemptData};
pub use error::{ParseProgressionError, PlayerDomainError};
pub use identity::{ChatProfile, DisplayName, Handle};
pub use ids::{AttemptId, ChatId, PlayerId};
pub use player::{PersistedPlayerData, Player, Score};
pub use progression::Progression;
