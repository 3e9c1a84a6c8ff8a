//! Domain model for the quiz task bank.
//!
//! The catalog domain models the tasks administrators curate and the answer
//! keys they are judged against, keeping all infrastructure concerns
//! outside of the domain boundary.

mod answer;
mod error;
mod ids;
mod task;

pub use answer::AnswerKey;
pub use error::CatalogDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Points, QuizTask};
