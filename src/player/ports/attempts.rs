//! Port for the append-only attempt log.

use crate::catalog::domain::TaskId;
use crate::player::domain::{Attempt, AttemptId, PlayerId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for attempt log operations.
pub type AttemptLogResult<T> = Result<T, AttemptLogError>;

/// Append-only attempt log contract.
///
/// Attempts are recorded once and never mutated or deleted.
#[async_trait]
pub trait AttemptLog: Send + Sync {
    /// Appends an attempt record.
    ///
    /// # Errors
    ///
    /// Returns [`AttemptLogError::DuplicateAttempt`] when the attempt ID
    /// already exists.
    async fn record(&self, attempt: &Attempt) -> AttemptLogResult<()>;

    /// Returns a player's attempts in submission order.
    async fn list_for_player(&self, player: PlayerId) -> AttemptLogResult<Vec<Attempt>>;

    /// Returns whether the player has a correct attempt against the task.
    async fn has_correct_attempt(
        &self,
        player: PlayerId,
        task: TaskId,
    ) -> AttemptLogResult<bool>;

    /// Returns the distinct tasks the player has solved.
    async fn solved_task_ids(&self, player: PlayerId) -> AttemptLogResult<Vec<TaskId>>;
}

/// Errors returned by attempt log implementations.
#[derive(Debug, Clone, Error)]
pub enum AttemptLogError {
    /// An attempt with the same identifier already exists.
    #[error("duplicate attempt identifier: {0}")]
    DuplicateAttempt(AttemptId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AttemptLogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
