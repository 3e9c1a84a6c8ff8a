//! Immutable attempt records.

use super::{AttemptId, PlayerId};
use crate::catalog::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One answer submission and its verdict.
///
/// Recorded once per submission and never mutated; the log doubles as the
/// "already solved" source of truth and the audit trail administrators
/// inspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    id: AttemptId,
    player: PlayerId,
    task: TaskId,
    answer_text: String,
    correct: bool,
    submitted_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted attempt record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAttemptData {
    /// Persisted attempt identifier.
    pub id: AttemptId,
    /// Player who submitted.
    pub player: PlayerId,
    /// Task the answer targeted.
    pub task: TaskId,
    /// Submitted answer text.
    pub answer_text: String,
    /// Verdict at submission time.
    pub correct: bool,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}

impl Attempt {
    /// Records a fresh attempt.
    #[must_use]
    pub fn record(
        player: PlayerId,
        task: TaskId,
        answer_text: impl Into<String>,
        correct: bool,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: AttemptId::new(),
            player,
            task,
            answer_text: answer_text.into(),
            correct,
            submitted_at: clock.utc(),
        }
    }

    /// Reconstructs an attempt from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAttemptData) -> Self {
        Self {
            id: data.id,
            player: data.player,
            task: data.task,
            answer_text: data.answer_text,
            correct: data.correct,
            submitted_at: data.submitted_at,
        }
    }

    /// Returns the attempt identifier.
    #[must_use]
    pub const fn id(&self) -> AttemptId {
        self.id
    }

    /// Returns the submitting player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Returns the targeted task.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }

    /// Returns the submitted answer text.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    /// Returns whether the answer was judged correct.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
