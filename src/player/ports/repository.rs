//! Repository port for player persistence and lookup.

use crate::player::domain::{ChatId, Handle, Player, PlayerId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for player repository operations.
pub type PlayerStoreResult<T> = Result<T, PlayerStoreError>;

/// Player persistence contract.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Stores a newly registered player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerStoreError::DuplicatePlayer`] when the player ID
    /// already exists or [`PlayerStoreError::DuplicateChatId`] when the
    /// chat identity is already registered.
    async fn store(&self, player: &Player) -> PlayerStoreResult<()>;

    /// Persists changes to an existing player (score, progression).
    ///
    /// # Errors
    ///
    /// Returns [`PlayerStoreError::NotFound`] when the player does not
    /// exist.
    async fn update(&self, player: &Player) -> PlayerStoreResult<()>;

    /// Finds a player by internal identifier.
    ///
    /// Returns `None` when the player does not exist.
    async fn find_by_id(&self, id: PlayerId) -> PlayerStoreResult<Option<Player>>;

    /// Finds a player by external chat identity.
    ///
    /// Returns `None` when no player is registered under the identity.
    async fn find_by_chat_id(&self, chat_id: ChatId) -> PlayerStoreResult<Option<Player>>;

    /// Finds a player by platform handle.
    ///
    /// Returns `None` when no player carries the handle.
    async fn find_by_handle(&self, handle: &Handle) -> PlayerStoreResult<Option<Player>>;

    /// Returns every registered player in registration order.
    async fn list_all(&self) -> PlayerStoreResult<Vec<Player>>;
}

/// Errors returned by player repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PlayerStoreError {
    /// A player with the same identifier already exists.
    #[error("duplicate player identifier: {0}")]
    DuplicatePlayer(PlayerId),

    /// A player with the same chat identity already exists.
    #[error("duplicate chat identity: {0}")]
    DuplicateChatId(ChatId),

    /// The player was not found.
    #[error("player not found: {0}")]
    NotFound(PlayerId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PlayerStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
