//! Orchestration services for the catalog module.

mod catalog;

pub use catalog::{
    CatalogServiceError, CatalogServiceResult, CreateTaskRequest, TaskCatalogService, TaskRevision,
};
