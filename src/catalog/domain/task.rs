//! Quiz task aggregate root and its point value type.

use super::{AnswerKey, CatalogDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point value awarded for solving a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u32);

impl Points {
    /// Largest point value representable in the current `PostgreSQL` schema.
    const MAX_PERSISTED_VALUE: u32 = i32::MAX as u32;

    /// Point value a task carries unless an administrator sets one.
    const DEFAULT_VALUE: u32 = 10;

    /// Creates a validated point value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::InvalidPoints`] when the value is zero
    /// or exceeds the schema-backed maximum (`i32::MAX`).
    pub const fn new(value: u32) -> Result<Self, CatalogDomainError> {
        if value == 0 || value > Self::MAX_PERSISTED_VALUE {
            return Err(CatalogDomainError::InvalidPoints(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for Points {
    fn default() -> Self {
        Self(Self::DEFAULT_VALUE)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quiz task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizTask {
    id: TaskId,
    title: String,
    description: String,
    image_url: Option<String>,
    answer: AnswerKey,
    points: Points,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted image reference, if any.
    pub image_url: Option<String>,
    /// Persisted answer key.
    pub answer: AnswerKey,
    /// Persisted point value.
    pub points: Points,
    /// Persisted activation flag.
    pub active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest revision timestamp.
    pub updated_at: DateTime<Utc>,
}

impl QuizTask {
    /// Creates a new active task.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyTitle`] or
    /// [`CatalogDomainError::EmptyDescription`] when the respective field is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: Option<String>,
        answer: AnswerKey,
        points: Points,
        clock: &impl Clock,
    ) -> Result<Self, CatalogDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: validated_title(title.into())?,
            description: validated_description(description.into())?,
            image_url,
            answer,
            points,
            active: true,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            image_url: data.image_url,
            answer: data.answer,
            points: data.points,
            active: data.active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the image reference shown with the task, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns the answer key.
    #[must_use]
    pub const fn answer(&self) -> &AnswerKey {
        &self.answer
    }

    /// Returns the point value.
    #[must_use]
    pub const fn points(&self) -> Points {
        self.points
    }

    /// Returns whether the task is in circulation.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest revision timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Judges a submitted answer against this task's key.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        self.answer.matches(candidate)
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyTitle`] when the value is empty
    /// after trimming.
    pub fn rename(
        &mut self,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), CatalogDomainError> {
        self.title = validated_title(title.into())?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyDescription`] when the value is
    /// empty after trimming.
    pub fn rewrite_description(
        &mut self,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), CatalogDomainError> {
        self.description = validated_description(description.into())?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces or clears the image reference.
    pub fn set_image_url(&mut self, image_url: Option<String>, clock: &impl Clock) {
        self.image_url = image_url;
        self.touch(clock);
    }

    /// Replaces the answer key.
    pub fn set_answer(&mut self, answer: AnswerKey, clock: &impl Clock) {
        self.answer = answer;
        self.touch(clock);
    }

    /// Replaces the point value.
    pub fn set_points(&mut self, points: Points, clock: &impl Clock) {
        self.points = points;
        self.touch(clock);
    }

    /// Puts the task into or removes it from circulation.
    ///
    /// Deactivation is the only way a task leaves circulation: attempt
    /// history keeps referring to it, so tasks are never physically deleted.
    pub fn set_active(&mut self, active: bool, clock: &impl Clock) {
        self.active = active;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn validated_title(title: String) -> Result<String, CatalogDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CatalogDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

fn validated_description(description: String) -> Result<String, CatalogDomainError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(CatalogDomainError::EmptyDescription);
    }
    Ok(trimmed.to_owned())
}
