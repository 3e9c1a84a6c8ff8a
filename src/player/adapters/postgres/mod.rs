//! `PostgreSQL` adapters for player and attempt persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PlayerPgPool, PostgresAttemptLog, PostgresPlayerRepository};
