//! Service layer for player registration and statistics.

use crate::catalog::domain::TaskId;
use crate::player::{
    domain::{ChatId, ChatProfile, Player, Score},
    ports::{AttemptLog, AttemptLogError, PlayerRepository, PlayerStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Progress summary shown to a player on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    /// Accumulated score.
    pub score: Score,
    /// Number of correct submissions.
    pub solved_count: usize,
    /// Whether a task request would currently be honoured.
    pub may_request: bool,
    /// Open assignment, if any.
    pub current_task: Option<TaskId>,
}

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum RosterServiceError {
    /// Player repository operation failed.
    #[error(transparent)]
    Players(#[from] PlayerStoreError),

    /// Attempt log operation failed.
    #[error(transparent)]
    Attempts(#[from] AttemptLogError),
}

/// Result type for roster service operations.
pub type RosterServiceResult<T> = Result<T, RosterServiceError>;

/// Player registration and statistics service.
#[derive(Clone)]
pub struct PlayerRosterService<P, A, C>
where
    P: PlayerRepository,
    A: AttemptLog,
    C: Clock + Send + Sync,
{
    players: Arc<P>,
    attempts: Arc<A>,
    clock: Arc<C>,
}

impl<P, A, C> PlayerRosterService<P, A, C>
where
    P: PlayerRepository,
    A: AttemptLog,
    C: Clock + Send + Sync,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(players: Arc<P>, attempts: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            players,
            attempts,
            clock,
        }
    }

    /// Returns the player for a chat identity, registering on first contact.
    ///
    /// A fresh registration starts with zero score and a free draw.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Players`] when lookup or persistence
    /// fails.
    pub async fn register_or_fetch(
        &self,
        chat_id: ChatId,
        profile: ChatProfile,
    ) -> RosterServiceResult<Player> {
        if let Some(existing) = self.players.find_by_chat_id(chat_id).await? {
            return Ok(existing);
        }

        let player = Player::register(chat_id, profile, &*self.clock);
        self.players.store(&player).await?;
        tracing::info!(player = %player.id(), chat = %chat_id, "player registered");
        Ok(player)
    }

    /// Returns the progress summary for a chat identity.
    ///
    /// Returns `Ok(None)` when the identity has never interacted.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError`] when lookup fails.
    pub async fn stats(&self, chat_id: ChatId) -> RosterServiceResult<Option<PlayerStats>> {
        let Some(player) = self.players.find_by_chat_id(chat_id).await? else {
            return Ok(None);
        };

        let attempts = self.attempts.list_for_player(player.id()).await?;
        let solved_count = attempts.iter().filter(|attempt| attempt.is_correct()).count();

        Ok(Some(PlayerStats {
            score: player.score(),
            solved_count,
            may_request: player.progression().may_request(),
            current_task: player.progression().assigned_task(),
        }))
    }

    /// Returns every registered player in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Players`] when the listing fails.
    pub async fn list_players(&self) -> RosterServiceResult<Vec<Player>> {
        Ok(self.players.list_all().await?)
    }
}
