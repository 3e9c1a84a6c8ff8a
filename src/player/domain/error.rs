//! Error types for player domain validation and parsing.

use super::ids::PlayerId;
use crate::catalog::domain::TaskId;
use thiserror::Error;

/// Errors returned while constructing or transitioning player state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlayerDomainError {
    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The handle is empty after trimming and stripping the leading `@`.
    #[error("handle must not be empty")]
    EmptyHandle,

    /// A new task cannot begin while another assignment is open.
    #[error("player {player} already has task {task} assigned")]
    TaskAlreadyAssigned {
        /// Player holding the assignment.
        player: PlayerId,
        /// The open assignment.
        task: TaskId,
    },

    /// The player solved a task and awaits administrator release.
    #[error("player {player} is blocked until an administrator grants permission")]
    RequestsBlocked {
        /// The blocked player.
        player: PlayerId,
    },

    /// An answer arrived without an open assignment to judge it against.
    #[error("player {player} has no active assignment")]
    NoActiveAssignment {
        /// The player without an assignment.
        player: PlayerId,
    },
}

/// Error returned while parsing progression state from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseProgressionError {
    /// The persisted state label is unknown.
    #[error("unknown progression state: {0}")]
    UnknownState(String),

    /// A non-assigned state carried a task reference.
    #[error("progression state '{state}' must not carry a task reference")]
    UnexpectedTask {
        /// The offending state label.
        state: String,
    },

    /// The assigned state is missing its task reference.
    #[error("assigned progression requires a task reference")]
    MissingTask,
}
