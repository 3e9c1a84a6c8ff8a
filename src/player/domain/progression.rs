//! The three-state progression machine governing task requests.

use super::ParseProgressionError;
use crate::catalog::domain::TaskId;
use serde::{Deserialize, Serialize};

/// Progression state of a player through the task workflow.
///
/// One tagged value replaces the permission-flag/current-task pair a
/// two-field model would need, so the invalid combinations (blocked with
/// an open assignment, assigned without a task) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Progression {
    /// May draw a new task.
    Idle,
    /// Working on the referenced task.
    Assigned {
        /// The open assignment.
        task: TaskId,
    },
    /// Solved a task; waiting for an administrator to grant a new draw.
    Blocked,
}

impl Progression {
    /// Returns whether the player may be handed a task on request.
    ///
    /// An assigned player may still request: they are re-shown their open
    /// task rather than drawing a fresh one.
    #[must_use]
    pub const fn may_request(self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Returns the open assignment, if any.
    #[must_use]
    pub const fn assigned_task(self) -> Option<TaskId> {
        match self {
            Self::Assigned { task } => Some(task),
            Self::Idle | Self::Blocked => None,
        }
    }

    /// Returns the canonical storage label.
    #[must_use]
    pub const fn state_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Assigned { .. } => "assigned",
            Self::Blocked => "blocked",
        }
    }

    /// Reconstructs a progression from its persisted label/task pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParseProgressionError`] when the label is unknown or the
    /// task reference does not fit the label.
    pub fn from_parts(
        state: &str,
        task: Option<TaskId>,
    ) -> Result<Self, ParseProgressionError> {
        let normalized = state.trim().to_ascii_lowercase();
        match (normalized.as_str(), task) {
            ("idle", None) => Ok(Self::Idle),
            ("assigned", Some(task_id)) => Ok(Self::Assigned { task: task_id }),
            ("blocked", None) => Ok(Self::Blocked),
            ("assigned", None) => Err(ParseProgressionError::MissingTask),
            ("idle" | "blocked", Some(_)) => Err(ParseProgressionError::UnexpectedTask {
                state: normalized,
            }),
            _ => Err(ParseProgressionError::UnknownState(state.to_owned())),
        }
    }
}
