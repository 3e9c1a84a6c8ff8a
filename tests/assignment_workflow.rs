//! Behavioural integration tests for the full assignment workflow.
//!
//! These tests exercise the public API end to end over the in-memory
//! adapters: a player draws a task, answers, gets blocked, and is released
//! by an administrator; administrative overrides respect their guards.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use quizdrop::assignment::adapters::memory::RecordingNotifier;
use quizdrop::assignment::domain::{AdminRoster, AnswerVerdict, PlayerLocator, TaskHandout};
use quizdrop::assignment::services::{AdminError, AdminService, AssignmentError, AssignmentService};
use quizdrop::catalog::adapters::memory::InMemoryTaskCatalog;
use quizdrop::catalog::domain::Points;
use quizdrop::catalog::services::CreateTaskRequest;
use quizdrop::player::adapters::memory::{InMemoryAttemptLog, InMemoryPlayerRepository};
use quizdrop::player::domain::{ChatId, ChatProfile, DisplayName};

const ADMIN: ChatId = ChatId::new(1);
const PLAYER: ChatId = ChatId::new(100);

type Assignments = AssignmentService<
    InMemoryTaskCatalog,
    InMemoryPlayerRepository,
    InMemoryAttemptLog,
    DefaultClock,
>;
type Admins = AdminService<
    InMemoryTaskCatalog,
    InMemoryPlayerRepository,
    InMemoryAttemptLog,
    RecordingNotifier,
    DefaultClock,
>;

fn build_services() -> (Assignments, Admins) {
    let tasks = Arc::new(InMemoryTaskCatalog::new());
    let players = Arc::new(InMemoryPlayerRepository::new());
    let attempts = Arc::new(InMemoryAttemptLog::new());
    let clock = Arc::new(DefaultClock);

    let assignments = AssignmentService::new(
        Arc::clone(&tasks),
        Arc::clone(&players),
        Arc::clone(&attempts),
        Arc::clone(&clock),
    );
    let admins = AdminService::new(
        AdminRoster::new([ADMIN]),
        tasks,
        players,
        attempts,
        Arc::new(RecordingNotifier::new()),
        clock,
    );
    (assignments, admins)
}

fn profile() -> ChatProfile {
    ChatProfile::new(DisplayName::new("Ada").expect("valid name"))
}

#[tokio::test(flavor = "multi_thread")]
async fn a_player_works_through_the_bank_with_admin_releases() {
    let (assignments, admins) = build_services();

    for title in ["First task", "Second task"] {
        admins
            .create_task(
                ADMIN,
                CreateTaskRequest::new(title, "Work it out.", "42")
                    .with_points(Points::new(10).expect("valid points")),
            )
            .await
            .expect("task creation should succeed");
    }

    // Draw a task; the wrong answer leaves everything in place.
    let handout = assignments
        .request_task(PLAYER, profile())
        .await
        .expect("request should succeed");
    let first_task = handout.task().clone();

    let wrong = assignments
        .submit_answer(PLAYER, profile(), "foo")
        .await
        .expect("submission should succeed");
    assert_eq!(wrong, AnswerVerdict::Incorrect);

    let still_open = assignments
        .request_task(PLAYER, profile())
        .await
        .expect("request should succeed");
    assert!(matches!(still_open, TaskHandout::Existing(_)));
    assert_eq!(still_open.task().id(), first_task.id());

    // The correct answer scores and blocks until an administrator acts.
    let verdict = assignments
        .submit_answer(PLAYER, profile(), first_task.answer().as_str())
        .await
        .expect("submission should succeed");
    assert!(matches!(
        verdict,
        AnswerVerdict::Correct { total_score, .. } if total_score.value() == 10
    ));
    assert!(matches!(
        assignments.request_task(PLAYER, profile()).await,
        Err(AssignmentError::RequestsBlocked { .. })
    ));

    admins
        .grant_permission(ADMIN, &PlayerLocator::Chat(PLAYER))
        .await
        .expect("grant should succeed");

    // The next draw excludes the solved task.
    let second = assignments
        .request_task(PLAYER, profile())
        .await
        .expect("request should succeed");
    assert!(second.is_fresh());
    assert_ne!(second.task().id(), first_task.id());

    // Solving the rest exhausts the bank.
    assignments
        .submit_answer(PLAYER, profile(), "42")
        .await
        .expect("submission should succeed");
    admins
        .grant_permission(ADMIN, &PlayerLocator::Chat(PLAYER))
        .await
        .expect("grant should succeed");
    assert!(matches!(
        assignments.request_task(PLAYER, profile()).await,
        Err(AssignmentError::NoTasksAvailable { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn force_assigning_a_solved_task_is_rejected() {
    let (assignments, admins) = build_services();

    let task = admins
        .create_task(ADMIN, CreateTaskRequest::new("Task", "Work it out.", "42"))
        .await
        .expect("task creation should succeed");

    assignments
        .request_task(PLAYER, profile())
        .await
        .expect("request should succeed");
    assignments
        .submit_answer(PLAYER, profile(), "42")
        .await
        .expect("submission should succeed");

    let result = admins
        .assign_task(ADMIN, &PlayerLocator::Chat(PLAYER), task.id())
        .await;

    assert!(matches!(
        result,
        Err(AdminError::AlreadySolved { task: solved, .. }) if solved == task.id()
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn outsiders_cannot_touch_the_admin_surface() {
    let (_assignments, admins) = build_services();

    let result = admins
        .create_task(PLAYER, CreateTaskRequest::new("Task", "Nope.", "42"))
        .await;

    assert!(matches!(
        result,
        Err(AdminError::PermissionDenied { actor }) if actor == PLAYER
    ));
}
