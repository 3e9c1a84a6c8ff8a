//! Service orchestration tests for task bank curation.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::catalog::{
    adapters::memory::InMemoryTaskCatalog,
    domain::{CatalogDomainError, Points, TaskId},
    services::{CatalogServiceError, CreateTaskRequest, TaskCatalogService, TaskRevision},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskCatalogService<InMemoryTaskCatalog, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskCatalogService::new(Arc::new(InMemoryTaskCatalog::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_and_is_retrievable(service: TestService) {
    let request = CreateTaskRequest::new(
        "Capital of France",
        "Name the capital city of France.",
        "Paris",
    )
    .with_image_url("https://example.org/map.png");

    let created = service
        .create_task(request)
        .await
        .expect("task creation should succeed");
    let fetched = service
        .task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_defaults_to_ten_points(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Title", "Description", "Answer"))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.points(), Points::default());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_blank_answer(service: TestService) {
    let result = service
        .create_task(CreateTaskRequest::new("Title", "Description", "   "))
        .await;
    assert!(matches!(
        result,
        Err(CatalogServiceError::Domain(CatalogDomainError::EmptyAnswer))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revise_task_applies_only_requested_fields(service: TestService) {
    let created = service
        .create_task(
            CreateTaskRequest::new("Title", "Description", "Answer")
                .with_image_url("https://example.org/one.png"),
        )
        .await
        .expect("task creation should succeed");

    let revision = TaskRevision::new()
        .with_title("Revised title")
        .with_points(Points::new(30).expect("valid points"))
        .with_image_url(None);
    let revised = service
        .revise_task(created.id(), revision)
        .await
        .expect("revision should succeed");

    assert_eq!(revised.title(), "Revised title");
    assert_eq!(revised.points().value(), 30);
    assert_eq!(revised.image_url(), None);
    assert_eq!(revised.description(), "Description");
    assert!(revised.accepts("answer"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revise_task_reports_missing_tasks(service: TestService) {
    let missing = TaskId::new();
    let result = service.revise_task(missing, TaskRevision::new()).await;
    assert!(matches!(
        result,
        Err(CatalogServiceError::TaskNotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_task_active_toggles_circulation(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Title", "Description", "Answer"))
        .await
        .expect("task creation should succeed");

    let deactivated = service
        .set_task_active(created.id(), false)
        .await
        .expect("deactivation should succeed");
    assert!(!deactivated.is_active());

    let reactivated = service
        .set_task_active(created.id(), true)
        .await
        .expect("reactivation should succeed");
    assert!(reactivated.is_active());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_includes_deactivated_tasks(service: TestService) {
    let first = service
        .create_task(CreateTaskRequest::new("First", "Description", "Answer"))
        .await
        .expect("task creation should succeed");
    let second = service
        .create_task(CreateTaskRequest::new("Second", "Description", "Answer"))
        .await
        .expect("task creation should succeed");
    service
        .set_task_active(second.id(), false)
        .await
        .expect("deactivation should succeed");

    let listing = service.list_tasks().await.expect("listing should succeed");

    assert_eq!(listing.len(), 2);
    assert!(listing.iter().any(|task| task.id() == first.id()));
    assert!(listing.iter().any(|task| task.id() == second.id()));
}
