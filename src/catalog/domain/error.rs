//! Error types for catalog domain validation.

use thiserror::Error;

/// Errors returned while constructing or revising quiz tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The accepted answer is empty after trimming.
    #[error("task answer must not be empty")]
    EmptyAnswer,

    /// The point value is zero or exceeds the schema-backed maximum.
    #[error("invalid point value {0}, expected a positive integer")]
    InvalidPoints(u32),
}
