//! In-memory attempt log for tests and database-free embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::catalog::domain::TaskId;
use crate::player::{
    domain::{Attempt, PlayerId},
    ports::{AttemptLog, AttemptLogError, AttemptLogResult},
};

/// Thread-safe in-memory attempt log.
///
/// A plain append vector: submission order is the storage order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttemptLog {
    state: Arc<RwLock<Vec<Attempt>>>,
}

impl InMemoryAttemptLog {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttemptLog for InMemoryAttemptLog {
    async fn record(&self, attempt: &Attempt) -> AttemptLogResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AttemptLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.iter().any(|existing| existing.id() == attempt.id()) {
            return Err(AttemptLogError::DuplicateAttempt(attempt.id()));
        }
        state.push(attempt.clone());
        Ok(())
    }

    async fn list_for_player(&self, player: PlayerId) -> AttemptLogResult<Vec<Attempt>> {
        let state = self.state.read().map_err(|err| {
            AttemptLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .iter()
            .filter(|attempt| attempt.player() == player)
            .cloned()
            .collect())
    }

    async fn has_correct_attempt(
        &self,
        player: PlayerId,
        task: TaskId,
    ) -> AttemptLogResult<bool> {
        let state = self.state.read().map_err(|err| {
            AttemptLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.iter().any(|attempt| {
            attempt.player() == player && attempt.task() == task && attempt.is_correct()
        }))
    }

    async fn solved_task_ids(&self, player: PlayerId) -> AttemptLogResult<Vec<TaskId>> {
        let state = self.state.read().map_err(|err| {
            AttemptLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut solved = Vec::new();
        for attempt in state.iter() {
            if attempt.player() == player
                && attempt.is_correct()
                && !solved.contains(&attempt.task())
            {
                solved.push(attempt.task());
            }
        }
        Ok(solved)
    }
}
