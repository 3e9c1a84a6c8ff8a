//! Recording notifier for tests and database-free embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::assignment::ports::{NotifierError, NotifierResult, PlayerNotifier};
use crate::catalog::domain::{QuizTask, TaskId};
use crate::player::domain::ChatId;

/// One delivered notification, as observed by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A task was force-assigned to the player.
    TaskAssigned {
        /// Notified chat identity.
        chat_id: ChatId,
        /// The assigned task.
        task: TaskId,
    },
    /// The player may draw a new task.
    PermissionGranted {
        /// Notified chat identity.
        chat_id: ChatId,
    },
}

/// Thread-safe notifier that records deliveries instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    state: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with an empty delivery log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications delivered so far, in order.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Delivery`] when the delivery log lock is
    /// poisoned.
    pub fn deliveries(&self) -> NotifierResult<Vec<Notification>> {
        let state = self
            .state
            .read()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }
}

#[async_trait]
impl PlayerNotifier for RecordingNotifier {
    async fn task_assigned(&self, chat_id: ChatId, task: &QuizTask) -> NotifierResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        state.push(Notification::TaskAssigned {
            chat_id,
            task: task.id(),
        });
        Ok(())
    }

    async fn permission_granted(&self, chat_id: ChatId) -> NotifierResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        state.push(Notification::PermissionGranted { chat_id });
        Ok(())
    }
}
