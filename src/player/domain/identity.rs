//! Validated identity scalars supplied by the chat transport.

use super::PlayerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable name shown for a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerDomainError::EmptyDisplayName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PlayerDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlayerDomainError::EmptyDisplayName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the display name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform handle a player may be addressed by (`@name` in commands).
///
/// Stored without the leading `@`; administrators may type either form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Creates a validated handle, stripping one leading `@`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerDomainError::EmptyHandle`] when nothing remains
    /// after trimming and stripping.
    pub fn new(value: impl Into<String>) -> Result<Self, PlayerDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if bare.is_empty() {
            return Err(PlayerDomainError::EmptyHandle);
        }
        Ok(Self(bare.to_owned()))
    }

    /// Returns the handle without its leading `@`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity payload the transport supplies on first contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatProfile {
    display_name: DisplayName,
    handle: Option<Handle>,
}

impl ChatProfile {
    /// Creates a profile with the required display name.
    #[must_use]
    pub const fn new(display_name: DisplayName) -> Self {
        Self {
            display_name,
            handle: None,
        }
    }

    /// Sets the optional platform handle.
    #[must_use]
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Returns the handle, if any.
    #[must_use]
    pub const fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Splits the profile into its parts.
    #[must_use]
    pub fn into_parts(self) -> (DisplayName, Option<Handle>) {
        (self.display_name, self.handle)
    }
}
