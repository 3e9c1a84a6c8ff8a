//! The administrator allow-list.

use crate::player::domain::ChatId;
use std::collections::HashSet;

/// Static allow-list of administrator chat identities.
///
/// Injected into the administrative surface at construction; there is no
/// role hierarchy and no ambient global list. An empty roster denies every
/// administrative operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRoster {
    members: HashSet<ChatId>,
}

impl AdminRoster {
    /// Creates a roster from the configured chat identities.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = ChatId>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Returns whether the chat identity may perform admin operations.
    #[must_use]
    pub fn is_admin(&self, chat_id: ChatId) -> bool {
        self.members.contains(&chat_id)
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
