//! Diesel row models for task bank persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Optional image reference.
    pub image_url: Option<String>,
    /// Accepted answer text.
    pub answer: String,
    /// Points awarded for a correct answer.
    pub points: i32,
    /// Whether the task is in circulation.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last revision timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
///
/// `treat_none_as_null` makes clearing the image reference persist as SQL
/// `NULL` instead of skipping the column.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Optional image reference.
    pub image_url: Option<String>,
    /// Accepted answer text.
    pub answer: String,
    /// Points awarded for a correct answer.
    pub points: i32,
    /// Whether the task is in circulation.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last revision timestamp.
    pub updated_at: DateTime<Utc>,
}
