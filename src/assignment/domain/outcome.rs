//! Outcome values returned by the assignment workflow.

use crate::catalog::domain::{Points, QuizTask};
use crate::player::domain::{ChatId, Handle, Score};
use std::fmt;

/// Result of a successful task request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskHandout {
    /// A freshly drawn assignment.
    Fresh(QuizTask),
    /// The already-open assignment, returned unchanged.
    Existing(QuizTask),
}

impl TaskHandout {
    /// Returns the handed-out task.
    #[must_use]
    pub const fn task(&self) -> &QuizTask {
        match self {
            Self::Fresh(task) | Self::Existing(task) => task,
        }
    }

    /// Returns whether this handout opened a new assignment.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

/// Verdict on a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    /// The answer matched; points were awarded and the player is blocked
    /// until an administrator grants a new draw.
    Correct {
        /// Points the solved task carried.
        points_awarded: Points,
        /// Player's total score after the award.
        total_score: Score,
    },
    /// The answer did not match; nothing changed beyond the attempt record.
    Incorrect,
}

impl AnswerVerdict {
    /// Returns whether the answer was judged correct.
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// How an administrator names a player in an override command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerLocator {
    /// By external chat identity.
    Chat(ChatId),
    /// By platform handle.
    Handle(Handle),
}

impl fmt::Display for PlayerLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat(chat_id) => write!(f, "chat {chat_id}"),
            Self::Handle(handle) => write!(f, "@{handle}"),
        }
    }
}
