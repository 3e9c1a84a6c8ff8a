//! Port for out-of-band player notifications.
//!
//! Administrative overrides reach players who did not trigger the
//! operation themselves; the chat transport implements this contract to
//! deliver those messages.

use crate::catalog::domain::QuizTask;
use crate::player::domain::ChatId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification delivery.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Out-of-band notification contract implemented by the chat transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerNotifier: Send + Sync {
    /// Tells a player an administrator assigned them a task.
    async fn task_assigned(&self, chat_id: ChatId, task: &QuizTask) -> NotifierResult<()>;

    /// Tells a player they may draw a new task.
    async fn permission_granted(&self, chat_id: ChatId) -> NotifierResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The transport failed to deliver the notification.
    #[error("notification delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifierError {
    /// Wraps a transport delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
