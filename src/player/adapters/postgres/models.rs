//! Diesel row models for player and attempt persistence.

use super::schema::{attempts, players};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for player records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlayerRow {
    /// Internal player identifier.
    pub id: uuid::Uuid,
    /// External chat identity.
    pub chat_id: i64,
    /// Display name.
    pub display_name: String,
    /// Optional platform handle.
    pub handle: Option<String>,
    /// Accumulated score.
    pub score: i64,
    /// Progression state label.
    pub progression: String,
    /// Open assignment, if any.
    pub current_task_id: Option<uuid::Uuid>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for player records.
///
/// `treat_none_as_null` makes a cleared assignment persist as SQL `NULL`
/// instead of skipping the column.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = players)]
#[diesel(treat_none_as_null = true)]
pub struct NewPlayerRow {
    /// Internal player identifier.
    pub id: uuid::Uuid,
    /// External chat identity.
    pub chat_id: i64,
    /// Display name.
    pub display_name: String,
    /// Optional platform handle.
    pub handle: Option<String>,
    /// Accumulated score.
    pub score: i64,
    /// Progression state label.
    pub progression: String,
    /// Open assignment, if any.
    pub current_task_id: Option<uuid::Uuid>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for attempt records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = attempts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AttemptRow {
    /// Attempt identifier.
    pub id: uuid::Uuid,
    /// Submitting player.
    pub player_id: uuid::Uuid,
    /// Targeted task.
    pub task_id: uuid::Uuid,
    /// Submitted answer text.
    pub answer_text: String,
    /// Verdict at submission time.
    pub correct: bool,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}

/// Insert model for attempt records; attempts are never updated.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = attempts)]
pub struct NewAttemptRow {
    /// Attempt identifier.
    pub id: uuid::Uuid,
    /// Submitting player.
    pub player_id: uuid::Uuid,
    /// Targeted task.
    pub task_id: uuid::Uuid,
    /// Submitted answer text.
    pub answer_text: String,
    /// Verdict at submission time.
    pub correct: bool,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}
