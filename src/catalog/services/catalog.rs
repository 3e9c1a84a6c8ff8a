//! Service layer for curating the task bank.

use crate::catalog::{
    domain::{AnswerKey, CatalogDomainError, Points, QuizTask, TaskId},
    ports::{TaskCatalogError, TaskCatalogRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for adding a task to the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    image_url: Option<String>,
    answer: String,
    points: Option<Points>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: None,
            answer: answer.into(),
            points: None,
        }
    }

    /// Sets the image reference shown with the task.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Sets the point value; tasks default to ten points otherwise.
    #[must_use]
    pub const fn with_points(mut self, points: Points) -> Self {
        self.points = Some(points);
        self
    }
}

/// Field-level revision of an existing task.
///
/// Only the fields an administrator filled in are applied; `image_url`
/// distinguishes "leave unchanged" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRevision {
    title: Option<String>,
    description: Option<String>,
    image_url: Option<Option<String>>,
    answer: Option<String>,
    points: Option<Points>,
}

impl TaskRevision {
    /// Creates an empty revision.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces or clears the image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    /// Replaces the accepted answer.
    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Replaces the point value.
    #[must_use]
    pub const fn with_points(mut self, points: Points) -> Self {
        self.points = Some(points);
        self
    }

    /// Returns whether the revision changes anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.answer.is_none()
            && self.points.is_none()
    }
}

/// Service-level errors for task bank operations.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskCatalogError),
}

/// Result type for task bank service operations.
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Task bank curation service.
#[derive(Clone)]
pub struct TaskCatalogService<R, C>
where
    R: TaskCatalogRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskCatalogService<R, C>
where
    R: TaskCatalogRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task bank service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Adds a new task to the bank.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError`] when field validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> CatalogServiceResult<QuizTask> {
        let answer = AnswerKey::new(request.answer)?;
        let points = request.points.unwrap_or_default();
        let task = QuizTask::new(
            request.title,
            request.description,
            request.image_url,
            answer,
            points,
            &*self.clock,
        )?;
        self.repository.store(&task).await?;
        tracing::info!(task = %task.id(), title = task.title(), "task added to bank");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] when the lookup fails.
    pub async fn task(&self, id: TaskId) -> CatalogServiceResult<Option<QuizTask>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every task in creation order, including deactivated ones.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] when the listing fails.
    pub async fn list_tasks(&self) -> CatalogServiceResult<Vec<QuizTask>> {
        Ok(self.repository.list_all().await?)
    }

    /// Applies a field-level revision to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::TaskNotFound`] when the task does not
    /// exist, or a domain/repository error when validation or persistence
    /// fails.
    pub async fn revise_task(
        &self,
        id: TaskId,
        revision: TaskRevision,
    ) -> CatalogServiceResult<QuizTask> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::TaskNotFound(id))?;

        if let Some(title) = revision.title {
            task.rename(title, &*self.clock)?;
        }
        if let Some(description) = revision.description {
            task.rewrite_description(description, &*self.clock)?;
        }
        if let Some(image_url) = revision.image_url {
            task.set_image_url(image_url, &*self.clock);
        }
        if let Some(answer) = revision.answer {
            task.set_answer(AnswerKey::new(answer)?, &*self.clock);
        }
        if let Some(points) = revision.points {
            task.set_points(points, &*self.clock);
        }

        self.repository.update(&task).await?;
        tracing::info!(task = %task.id(), "task revised");
        Ok(task)
    }

    /// Puts a task into or removes it from circulation.
    ///
    /// Deactivation is the supported removal path; tasks are never
    /// physically deleted because attempt history refers to them.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::TaskNotFound`] when the task does not
    /// exist, or [`CatalogServiceError::Repository`] when persistence fails.
    pub async fn set_task_active(
        &self,
        id: TaskId,
        active: bool,
    ) -> CatalogServiceResult<QuizTask> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::TaskNotFound(id))?;
        task.set_active(active, &*self.clock);
        self.repository.update(&task).await?;
        tracing::info!(task = %task.id(), active, "task circulation changed");
        Ok(task)
    }
}
