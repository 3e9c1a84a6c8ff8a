//! Task handout and answer evaluation workflow.

use crate::assignment::domain::{AnswerVerdict, TaskHandout};
use crate::catalog::{
    domain::{QuizTask, TaskId},
    ports::{TaskCatalogError, TaskCatalogRepository},
};
use crate::player::{
    domain::{Attempt, ChatId, ChatProfile, Player, PlayerDomainError, PlayerId, Progression},
    ports::{AttemptLog, AttemptLogError, PlayerRepository, PlayerStoreError},
};
use mockable::Clock;
use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for the assignment workflow.
#[derive(Debug, Error)]
pub enum AssignmentError {
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

    /// Every active task has already been solved by the player.
    #[error("no eligible tasks remain for player {player}")]
    NoTasksAvailable {
        /// The player who exhausted the bank.
        player: PlayerId,
    },

    /// An assignment references a task the catalog no longer yields.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Domain transition was rejected.
    #[error(transparent)]
    Domain(#[from] PlayerDomainError),

    /// Task catalog operation failed.
    #[error(transparent)]
    Catalog(#[from] TaskCatalogError),

    /// Player repository operation failed.
    #[error(transparent)]
    Players(#[from] PlayerStoreError),

    /// Attempt log operation failed.
    #[error(transparent)]
    Attempts(#[from] AttemptLogError),
}

/// Result type for assignment workflow operations.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// Task handout and answer evaluation service.
#[derive(Clone)]
pub struct AssignmentService<T, P, A, C>
where
    T: TaskCatalogRepository,
    P: PlayerRepository,
    A: AttemptLog,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    players: Arc<P>,
    attempts: Arc<A>,
    clock: Arc<C>,
}

impl<T, P, A, C> AssignmentService<T, P, A, C>
where
    T: TaskCatalogRepository,
    P: PlayerRepository,
    A: AttemptLog,
    C: Clock + Send + Sync,
{
    /// Creates a new assignment service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, players: Arc<P>, attempts: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            players,
            attempts,
            clock,
        }
    }

    /// Hands a task to the player behind the chat identity.
    ///
    /// Registers the player on first contact. A player with an open
    /// assignment is re-shown that task unchanged; an idle player draws
    /// uniformly at random among active tasks they have not solved.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::RequestsBlocked`] for blocked players,
    /// [`AssignmentError::NoTasksAvailable`] when the bank is exhausted,
    /// [`AssignmentError::TaskNotFound`] when an open assignment references
    /// a missing catalog row, or a repository error when persistence fails.
    pub async fn request_task(
        &self,
        chat_id: ChatId,
        profile: ChatProfile,
    ) -> AssignmentResult<TaskHandout> {
        let mut player = self.register_or_fetch(chat_id, profile).await?;

        match player.progression() {
            Progression::Blocked => {
                Err(AssignmentError::RequestsBlocked { player: player.id() })
            }
            Progression::Assigned { task } => {
                let current = self
                    .tasks
                    .find_by_id(task)
                    .await?
                    .ok_or(AssignmentError::TaskNotFound(task))?;
                Ok(TaskHandout::Existing(current))
            }
            Progression::Idle => {
                let eligible = self.eligible_tasks(player.id()).await?;
                let Some(task) = pick_uniform(&eligible) else {
                    return Err(AssignmentError::NoTasksAvailable { player: player.id() });
                };

                player.begin_task(task.id(), &*self.clock)?;
                self.players.update(&player).await?;
                tracing::info!(player = %player.id(), task = %task.id(), "task drawn");
                Ok(TaskHandout::Fresh(task))
            }
        }
    }

    /// Judges an answer against the player's open assignment.
    ///
    /// An attempt is recorded for every submission. A correct answer
    /// awards the task's points, clears the assignment, and blocks further
    /// requests until an administrator grants permission; an incorrect one
    /// changes nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::RequestsBlocked`] for blocked players,
    /// [`AssignmentError::NoActiveAssignment`] without an open assignment,
    /// or a repository error when persistence fails.
    pub async fn submit_answer(
        &self,
        chat_id: ChatId,
        profile: ChatProfile,
        raw_answer: &str,
    ) -> AssignmentResult<AnswerVerdict> {
        let mut player = self.register_or_fetch(chat_id, profile).await?;

        let task_id = match player.progression() {
            Progression::Blocked => {
                return Err(AssignmentError::RequestsBlocked { player: player.id() });
            }
            Progression::Idle => {
                return Err(AssignmentError::NoActiveAssignment { player: player.id() });
            }
            Progression::Assigned { task } => task,
        };

        let task = self.tasks.find_by_id(task_id).await?;
        let correct = task
            .as_ref()
            .is_some_and(|current| current.accepts(raw_answer));

        let attempt = Attempt::record(player.id(), task_id, raw_answer, correct, &*self.clock);
        self.attempts.record(&attempt).await?;
        tracing::info!(player = %player.id(), task = %task_id, correct, "answer judged");

        match task {
            Some(current) if correct => {
                player.complete_task(current.points(), &*self.clock)?;
                self.players.update(&player).await?;
                Ok(AnswerVerdict::Correct {
                    points_awarded: current.points(),
                    total_score: player.score(),
                })
            }
            _ => Ok(AnswerVerdict::Incorrect),
        }
    }

    /// Judges an answer against an arbitrary task.
    ///
    /// An unknown task evaluates as incorrect rather than failing, so
    /// callers need not distinguish the cases.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Catalog`] when the lookup itself fails.
    pub async fn check_answer(&self, task_id: TaskId, raw_answer: &str) -> AssignmentResult<bool> {
        let task = self.tasks.find_by_id(task_id).await?;
        Ok(task.is_some_and(|current| current.accepts(raw_answer)))
    }

    async fn register_or_fetch(
        &self,
        chat_id: ChatId,
        profile: ChatProfile,
    ) -> AssignmentResult<Player> {
        if let Some(existing) = self.players.find_by_chat_id(chat_id).await? {
            return Ok(existing);
        }

        let player = Player::register(chat_id, profile, &*self.clock);
        self.players.store(&player).await?;
        tracing::info!(player = %player.id(), chat = %chat_id, "player registered");
        Ok(player)
    }

    /// Active tasks the player has not solved, in creation order.
    async fn eligible_tasks(&self, player: PlayerId) -> AssignmentResult<Vec<QuizTask>> {
        let active = self.tasks.list_active().await?;
        let solved = self.attempts.solved_task_ids(player).await?;
        Ok(active
            .into_iter()
            .filter(|task| !solved.contains(&task.id()))
            .collect())
    }
}

/// Uniform random choice among the eligible tasks.
fn pick_uniform(tasks: &[QuizTask]) -> Option<QuizTask> {
    tasks.choose(&mut rand::thread_rng()).cloned()
}
