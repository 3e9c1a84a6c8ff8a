//! `PostgreSQL` adapters for task bank persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CatalogPgPool, PostgresTaskCatalog};
