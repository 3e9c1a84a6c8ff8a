//! Repository port for task bank persistence and lookup.

use crate::catalog::domain::{QuizTask, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task catalog operations.
pub type TaskCatalogResult<T> = Result<T, TaskCatalogError>;

/// Task bank persistence contract.
#[async_trait]
pub trait TaskCatalogRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &QuizTask) -> TaskCatalogResult<()>;

    /// Persists changes to an existing task (revisions, activation state).
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::NotFound`] when the task does not exist.
    async fn update(&self, task: &QuizTask) -> TaskCatalogResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskCatalogResult<Option<QuizTask>>;

    /// Returns every task in creation order, including deactivated ones.
    async fn list_all(&self) -> TaskCatalogResult<Vec<QuizTask>>;

    /// Returns the tasks currently in circulation, in creation order.
    async fn list_active(&self) -> TaskCatalogResult<Vec<QuizTask>>;
}

/// Errors returned by task catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskCatalogError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskCatalogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
