//! Roster-gated administrative surface.
//!
//! Every operation checks the injected [`AdminRoster`] before touching any
//! state; a non-administrator gets [`AdminError::PermissionDenied`] and
//! nothing else happens. Player notifications go out after the mutation
//! commits; delivery failures are logged, not surfaced.

use crate::assignment::domain::{AdminRoster, PlayerLocator};
use crate::assignment::ports::PlayerNotifier;
use crate::catalog::{
    domain::{QuizTask, TaskId},
    ports::TaskCatalogRepository,
    services::{CatalogServiceError, CreateTaskRequest, TaskCatalogService, TaskRevision},
};
use crate::player::{
    domain::{Attempt, ChatId, Player, PlayerId},
    ports::{AttemptLog, AttemptLogError, PlayerRepository, PlayerStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// A player together with their open assignment, for oversight listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOverview {
    /// The player record.
    pub player: Player,
    /// The open assignment, when one exists in the catalog.
    pub current_task: Option<QuizTask>,
}

/// Service-level errors for administrative operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The acting chat identity is not on the administrator roster.
    #[error("chat {actor} is not an administrator")]
    PermissionDenied {
        /// The rejected actor.
        actor: ChatId,
    },

    /// No player matches the locator.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerLocator),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced task is not in circulation.
    #[error("task {task} is not in circulation")]
    TaskInactive {
        /// The deactivated task.
        task: TaskId,
    },

    /// The player already solved the task being assigned.
    #[error("player {player} already solved task {task}")]
    AlreadySolved {
        /// The targeted player.
        player: PlayerId,
        /// The already-solved task.
        task: TaskId,
    },

    /// Task bank operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogServiceError),

    /// Player repository operation failed.
    #[error(transparent)]
    Players(#[from] PlayerStoreError),

    /// Attempt log operation failed.
    #[error(transparent)]
    Attempts(#[from] AttemptLogError),
}

/// Result type for administrative operations.
pub type AdminResult<T> = Result<T, AdminError>;

/// Administrative control surface.
#[derive(Clone)]
pub struct AdminService<T, P, A, N, C>
where
    T: TaskCatalogRepository,
    P: PlayerRepository,
    A: AttemptLog,
    N: PlayerNotifier,
    C: Clock + Send + Sync,
{
    roster: AdminRoster,
    catalog: TaskCatalogService<T, C>,
    players: Arc<P>,
    attempts: Arc<A>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<T, P, A, N, C> AdminService<T, P, A, N, C>
where
    T: TaskCatalogRepository,
    P: PlayerRepository,
    A: AttemptLog,
    N: PlayerNotifier,
    C: Clock + Send + Sync,
{
    /// Creates a new administrative surface with the injected roster.
    #[must_use]
    pub fn new(
        roster: AdminRoster,
        tasks: Arc<T>,
        players: Arc<P>,
        attempts: Arc<A>,
        notifier: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            roster,
            catalog: TaskCatalogService::new(tasks, Arc::clone(&clock)),
            players,
            attempts,
            notifier,
            clock,
        }
    }

    /// Adds a new task to the bank.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators, or
    /// a catalog error when validation or persistence fails.
    pub async fn create_task(
        &self,
        actor: ChatId,
        request: CreateTaskRequest,
    ) -> AdminResult<QuizTask> {
        self.authorize(actor)?;
        Ok(self.catalog.create_task(request).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators or
    /// [`AdminError::Catalog`] when the lookup fails.
    pub async fn task(&self, actor: ChatId, id: TaskId) -> AdminResult<Option<QuizTask>> {
        self.authorize(actor)?;
        Ok(self.catalog.task(id).await?)
    }

    /// Lists every task, including deactivated ones.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators or
    /// [`AdminError::Catalog`] when the listing fails.
    pub async fn list_tasks(&self, actor: ChatId) -> AdminResult<Vec<QuizTask>> {
        self.authorize(actor)?;
        Ok(self.catalog.list_tasks().await?)
    }

    /// Applies a field-level revision to a task.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators, or
    /// a catalog error when the task is missing or validation fails.
    pub async fn revise_task(
        &self,
        actor: ChatId,
        id: TaskId,
        revision: TaskRevision,
    ) -> AdminResult<QuizTask> {
        self.authorize(actor)?;
        Ok(self.catalog.revise_task(id, revision).await?)
    }

    /// Puts a task into or removes it from circulation.
    ///
    /// Deactivation is the supported removal path; there is no physical
    /// delete.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators, or
    /// a catalog error when the task is missing or persistence fails.
    pub async fn set_task_active(
        &self,
        actor: ChatId,
        id: TaskId,
        active: bool,
    ) -> AdminResult<QuizTask> {
        self.authorize(actor)?;
        Ok(self.catalog.set_task_active(id, active).await?)
    }

    /// Lists every player with their open assignment resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators or
    /// a repository error when lookups fail.
    pub async fn list_players(&self, actor: ChatId) -> AdminResult<Vec<PlayerOverview>> {
        self.authorize(actor)?;

        let players = self.players.list_all().await?;
        let mut overviews = Vec::with_capacity(players.len());
        for player in players {
            let current_task = match player.progression().assigned_task() {
                Some(task_id) => self.catalog.task(task_id).await?,
                None => None,
            };
            overviews.push(PlayerOverview {
                player,
                current_task,
            });
        }
        Ok(overviews)
    }

    /// Returns a player's attempt history for audit display.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators,
    /// [`AdminError::PlayerNotFound`] for an unknown locator, or a
    /// repository error when lookups fail.
    pub async fn attempt_history(
        &self,
        actor: ChatId,
        locator: &PlayerLocator,
    ) -> AdminResult<Vec<Attempt>> {
        self.authorize(actor)?;
        let player = self.locate(locator).await?;
        Ok(self.attempts.list_for_player(player.id()).await?)
    }

    /// Grants the player a new draw, discarding any open assignment.
    ///
    /// Unconditional: this is the only path out of the blocked state. The
    /// player is notified out-of-band after the change commits.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators,
    /// [`AdminError::PlayerNotFound`] for an unknown locator, or a
    /// repository error when persistence fails.
    pub async fn grant_permission(
        &self,
        actor: ChatId,
        locator: &PlayerLocator,
    ) -> AdminResult<Player> {
        self.authorize(actor)?;

        let mut player = self.locate(locator).await?;
        player.unlock(&*self.clock);
        self.players.update(&player).await?;
        tracing::info!(actor = %actor, player = %player.id(), "permission granted");

        if let Err(err) = self.notifier.permission_granted(player.chat_id()).await {
            tracing::warn!(player = %player.id(), error = %err, "permission notification failed");
        }
        Ok(player)
    }

    /// Force-assigns a specific task, overriding the player's state.
    ///
    /// The task must exist, be in circulation, and not already be solved by
    /// the player; otherwise nothing is mutated. The player is notified
    /// out-of-band after the change commits.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] for non-administrators,
    /// [`AdminError::TaskNotFound`], [`AdminError::TaskInactive`],
    /// [`AdminError::AlreadySolved`], [`AdminError::PlayerNotFound`], or a
    /// repository error when persistence fails.
    pub async fn assign_task(
        &self,
        actor: ChatId,
        locator: &PlayerLocator,
        task_id: TaskId,
    ) -> AdminResult<QuizTask> {
        self.authorize(actor)?;

        let task = self
            .catalog
            .task(task_id)
            .await?
            .ok_or(AdminError::TaskNotFound(task_id))?;
        if !task.is_active() {
            return Err(AdminError::TaskInactive { task: task_id });
        }

        let mut player = self.locate(locator).await?;
        if self
            .attempts
            .has_correct_attempt(player.id(), task_id)
            .await?
        {
            return Err(AdminError::AlreadySolved {
                player: player.id(),
                task: task_id,
            });
        }

        player.force_assign(task_id, &*self.clock);
        self.players.update(&player).await?;
        tracing::info!(actor = %actor, player = %player.id(), task = %task_id, "task force-assigned");

        if let Err(err) = self.notifier.task_assigned(player.chat_id(), &task).await {
            tracing::warn!(player = %player.id(), error = %err, "assignment notification failed");
        }
        Ok(task)
    }

    fn authorize(&self, actor: ChatId) -> AdminResult<()> {
        if self.roster.is_admin(actor) {
            Ok(())
        } else {
            tracing::warn!(actor = %actor, "admin operation denied");
            Err(AdminError::PermissionDenied { actor })
        }
    }

    async fn locate(&self, locator: &PlayerLocator) -> AdminResult<Player> {
        let found = match locator {
            PlayerLocator::Chat(chat_id) => self.players.find_by_chat_id(*chat_id).await?,
            PlayerLocator::Handle(handle) => self.players.find_by_handle(handle).await?,
        };
        found.ok_or_else(|| AdminError::PlayerNotFound(locator.clone()))
    }
}
