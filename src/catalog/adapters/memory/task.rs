//! In-memory task bank for tests and database-free embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::{
    domain::{QuizTask, TaskId},
    ports::{TaskCatalogError, TaskCatalogRepository, TaskCatalogResult},
};

/// Thread-safe in-memory task catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskCatalog {
    state: Arc<RwLock<HashMap<TaskId, QuizTask>>>,
}

impl InMemoryTaskCatalog {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Snapshot in creation order so listings are stable across calls.
fn ordered(tasks: &HashMap<TaskId, QuizTask>) -> Vec<QuizTask> {
    let mut listing: Vec<QuizTask> = tasks.values().cloned().collect();
    listing.sort_by_key(|task| (task.created_at(), task.id()));
    listing
}

#[async_trait]
impl TaskCatalogRepository for InMemoryTaskCatalog {
    async fn store(&self, task: &QuizTask) -> TaskCatalogResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskCatalogError::persistence(std::io::Error::other(err.to_string())))?;
        if state.contains_key(&task.id()) {
            return Err(TaskCatalogError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &QuizTask) -> TaskCatalogResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskCatalogError::persistence(std::io::Error::other(err.to_string())))?;
        if !state.contains_key(&task.id()) {
            return Err(TaskCatalogError::NotFound(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskCatalogResult<Option<QuizTask>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskCatalogError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskCatalogResult<Vec<QuizTask>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskCatalogError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(ordered(&state))
    }

    async fn list_active(&self) -> TaskCatalogResult<Vec<QuizTask>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskCatalogError::persistence(std::io::Error::other(err.to_string())))?;
        let mut listing = ordered(&state);
        listing.retain(QuizTask::is_active);
        Ok(listing)
    }
}
