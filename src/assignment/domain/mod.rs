//! Domain values for the assignment workflow.

mod outcome;
mod roster;

pub use outcome::{AnswerVerdict, PlayerLocator, TaskHandout};
pub use roster::AdminRoster;
