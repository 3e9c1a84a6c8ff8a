//! Player aggregate root and score type.

use super::{ChatId, ChatProfile, DisplayName, Handle, PlayerDomainError, PlayerId, Progression};
use crate::catalog::domain::{Points, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accumulated score of a player.
///
/// Non-negative and monotonically non-decreasing: points are only ever
/// awarded, never revoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// The score every player starts with.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Creates a score from a persisted value.
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns this score with the given points added.
    #[must_use]
    pub const fn awarded(self, points: Points) -> Self {
        Self(self.0.saturating_add(points.value()))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    chat_id: ChatId,
    display_name: DisplayName,
    handle: Option<Handle>,
    score: Score,
    progression: Progression,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted player aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPlayerData {
    /// Persisted player identifier.
    pub id: PlayerId,
    /// Persisted chat identity.
    pub chat_id: ChatId,
    /// Persisted display name.
    pub display_name: DisplayName,
    /// Persisted handle, if any.
    pub handle: Option<Handle>,
    /// Persisted score.
    pub score: Score,
    /// Persisted progression state.
    pub progression: Progression,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Registers a player on first contact: zero score, free to draw.
    #[must_use]
    pub fn register(chat_id: ChatId, profile: ChatProfile, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let (display_name, handle) = profile.into_parts();
        Self {
            id: PlayerId::new(),
            chat_id,
            display_name,
            handle,
            score: Score::zero(),
            progression: Progression::Idle,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a player from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPlayerData) -> Self {
        Self {
            id: data.id,
            chat_id: data.chat_id,
            display_name: data.display_name,
            handle: data.handle,
            score: data.score,
            progression: data.progression,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the player identifier.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the external chat identity.
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Returns the platform handle, if any.
    #[must_use]
    pub const fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Returns the accumulated score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the progression state.
    #[must_use]
    pub const fn progression(&self) -> Progression {
        self.progression
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Opens an assignment for an idle player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerDomainError::TaskAlreadyAssigned`] while another
    /// assignment is open, or [`PlayerDomainError::RequestsBlocked`] while
    /// the player awaits administrator release.
    pub fn begin_task(
        &mut self,
        task: TaskId,
        clock: &impl Clock,
    ) -> Result<(), PlayerDomainError> {
        match self.progression {
            Progression::Idle => {
                self.progression = Progression::Assigned { task };
                self.touch(clock);
                Ok(())
            }
            Progression::Assigned { task: open } => Err(PlayerDomainError::TaskAlreadyAssigned {
                player: self.id,
                task: open,
            }),
            Progression::Blocked => Err(PlayerDomainError::RequestsBlocked { player: self.id }),
        }
    }

    /// Closes the open assignment after a correct answer.
    ///
    /// Awards the points, clears the assignment, and blocks further
    /// requests until an administrator grants permission. Returns the
    /// solved task.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerDomainError::NoActiveAssignment`] when no
    /// assignment is open.
    pub fn complete_task(
        &mut self,
        points: Points,
        clock: &impl Clock,
    ) -> Result<TaskId, PlayerDomainError> {
        match self.progression {
            Progression::Assigned { task } => {
                self.score = self.score.awarded(points);
                self.progression = Progression::Blocked;
                self.touch(clock);
                Ok(task)
            }
            Progression::Idle | Progression::Blocked => {
                Err(PlayerDomainError::NoActiveAssignment { player: self.id })
            }
        }
    }

    /// Administrator release: returns the player to the idle state.
    ///
    /// Unconditional; an open-but-unanswered assignment is discarded so
    /// the player draws fresh on their next request.
    pub fn unlock(&mut self, clock: &impl Clock) {
        self.progression = Progression::Idle;
        self.touch(clock);
    }

    /// Administrator override: opens the given assignment from any state.
    ///
    /// Eligibility checks (task exists, active, not already solved) belong
    /// to the administrative surface; the aggregate records the outcome.
    pub fn force_assign(&mut self, task: TaskId, clock: &impl Clock) {
        self.progression = Progression::Assigned { task };
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
