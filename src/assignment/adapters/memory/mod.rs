//! In-memory adapter implementations for the assignment module.

mod notifier;

pub use notifier::{Notification, RecordingNotifier};
