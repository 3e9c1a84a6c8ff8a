//! Answer key and the normalization rule answers are judged under.

use super::CatalogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted free-text answer for a quiz task.
///
/// The stored text keeps the administrator's casing; matching normalizes
/// both sides. Normalization is trim plus Unicode lowercasing only:
/// punctuation, accents, and alternative answers are not folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(String);

impl AnswerKey {
    /// Creates a validated answer key.
    ///
    /// Surrounding whitespace is stripped from the stored text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyAnswer`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogDomainError::EmptyAnswer);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the stored answer text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Judges a submitted answer against this key.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        normalize(&self.0) == normalize(candidate)
    }
}

impl AsRef<str> for AnswerKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical comparison form: trimmed, Unicode-lowercased.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
