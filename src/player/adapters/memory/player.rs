//! In-memory player repository for tests and database-free embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::player::{
    domain::{ChatId, Handle, Player, PlayerId},
    ports::{PlayerRepository, PlayerStoreError, PlayerStoreResult},
};

/// Thread-safe in-memory player repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerRepository {
    state: Arc<RwLock<InMemoryPlayerState>>,
}

#[derive(Debug, Default)]
struct InMemoryPlayerState {
    players: HashMap<PlayerId, Player>,
    chat_index: HashMap<ChatId, PlayerId>,
    handle_index: HashMap<String, PlayerId>,
}

impl InMemoryPlayerRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_handle(state: &mut InMemoryPlayerState, player: &Player) {
    if let Some(handle) = player.handle() {
        state
            .handle_index
            .insert(handle.as_str().to_owned(), player.id());
    }
}

/// Registration-ordered snapshot so listings are stable across calls.
fn ordered(players: &HashMap<PlayerId, Player>) -> Vec<Player> {
    let mut listing: Vec<Player> = players.values().cloned().collect();
    listing.sort_by_key(|player| (player.created_at(), player.chat_id().value()));
    listing
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn store(&self, player: &Player) -> PlayerStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PlayerStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.players.contains_key(&player.id()) {
            return Err(PlayerStoreError::DuplicatePlayer(player.id()));
        }
        if state.chat_index.contains_key(&player.chat_id()) {
            return Err(PlayerStoreError::DuplicateChatId(player.chat_id()));
        }

        state.chat_index.insert(player.chat_id(), player.id());
        index_handle(&mut state, player);
        state.players.insert(player.id(), player.clone());
        Ok(())
    }

    async fn update(&self, player: &Player) -> PlayerStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PlayerStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_player = state
            .players
            .get(&player.id())
            .ok_or(PlayerStoreError::NotFound(player.id()))?
            .clone();

        if let Some(old_handle) = old_player.handle() {
            state.handle_index.remove(old_handle.as_str());
        }
        index_handle(&mut state, player);
        state.players.insert(player.id(), player.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: PlayerId) -> PlayerStoreResult<Option<Player>> {
        let state = self.state.read().map_err(|err| {
            PlayerStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.players.get(&id).cloned())
    }

    async fn find_by_chat_id(&self, chat_id: ChatId) -> PlayerStoreResult<Option<Player>> {
        let state = self.state.read().map_err(|err| {
            PlayerStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let player = state
            .chat_index
            .get(&chat_id)
            .and_then(|player_id| state.players.get(player_id))
            .cloned();
        Ok(player)
    }

    async fn find_by_handle(&self, handle: &Handle) -> PlayerStoreResult<Option<Player>> {
        let state = self.state.read().map_err(|err| {
            PlayerStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let player = state
            .handle_index
            .get(handle.as_str())
            .and_then(|player_id| state.players.get(player_id))
            .cloned();
        Ok(player)
    }

    async fn list_all(&self) -> PlayerStoreResult<Vec<Player>> {
        let state = self.state.read().map_err(|err| {
            PlayerStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(ordered(&state.players))
    }
}
