//! Workflow tests for task handout and answer evaluation.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::assignment::{
    domain::{AnswerVerdict, TaskHandout},
    services::{AssignmentError, AssignmentService},
};
use crate::catalog::{
    adapters::memory::InMemoryTaskCatalog,
    domain::{AnswerKey, Points, QuizTask, TaskId},
    ports::TaskCatalogRepository,
};
use crate::player::{
    adapters::memory::{InMemoryAttemptLog, InMemoryPlayerRepository},
    domain::{Attempt, ChatId, ChatProfile, DisplayName, Player, Progression},
    ports::{AttemptLog, PlayerRepository},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = AssignmentService<
    InMemoryTaskCatalog,
    InMemoryPlayerRepository,
    InMemoryAttemptLog,
    DefaultClock,
>;

struct Harness {
    tasks: Arc<InMemoryTaskCatalog>,
    players: Arc<InMemoryPlayerRepository>,
    attempts: Arc<InMemoryAttemptLog>,
    service: TestService,
}

#[fixture]
fn harness() -> Harness {
    let tasks = Arc::new(InMemoryTaskCatalog::new());
    let players = Arc::new(InMemoryPlayerRepository::new());
    let attempts = Arc::new(InMemoryAttemptLog::new());
    let service = AssignmentService::new(
        Arc::clone(&tasks),
        Arc::clone(&players),
        Arc::clone(&attempts),
        Arc::new(DefaultClock),
    );
    Harness {
        tasks,
        players,
        attempts,
        service,
    }
}

fn profile(name: &str) -> ChatProfile {
    ChatProfile::new(DisplayName::new(name).expect("valid name"))
}

async fn seed_task(harness: &Harness, title: &str, answer: &str, points: u32) -> QuizTask {
    let clock = DefaultClock;
    let task = QuizTask::new(
        title,
        "Description",
        None,
        AnswerKey::new(answer).expect("valid answer"),
        Points::new(points).expect("valid points"),
        &clock,
    )
    .expect("valid task");
    harness
        .tasks
        .store(&task)
        .await
        .expect("seeding should succeed");
    task
}

async fn seed_inactive_task(harness: &Harness, title: &str) -> QuizTask {
    let clock = DefaultClock;
    let mut task = QuizTask::new(
        title,
        "Description",
        None,
        AnswerKey::new("Answer").expect("valid answer"),
        Points::default(),
        &clock,
    )
    .expect("valid task");
    task.set_active(false, &clock);
    harness
        .tasks
        .store(&task)
        .await
        .expect("seeding should succeed");
    task
}

async fn fetch_player(harness: &Harness, chat: ChatId) -> Player {
    harness
        .players
        .find_by_chat_id(chat)
        .await
        .expect("lookup should succeed")
        .expect("player exists")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_task_registers_and_assigns(harness: Harness) {
    let seeded = seed_task(&harness, "Only task", "Answer", 10).await;
    let chat = ChatId::new(1);

    let handout = harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");

    assert!(handout.is_fresh());
    assert_eq!(handout.task().id(), seeded.id());

    let player = fetch_player(&harness, chat).await;
    assert_eq!(
        player.progression(),
        Progression::Assigned { task: seeded.id() }
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_requests_return_the_open_assignment(harness: Harness) {
    seed_task(&harness, "First", "Answer", 10).await;
    seed_task(&harness, "Second", "Answer", 10).await;
    let chat = ChatId::new(1);

    let first = harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");
    let second = harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");
    let third = harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");

    assert!(matches!(second, TaskHandout::Existing(_)));
    assert_eq!(first.task(), second.task());
    assert_eq!(second.task(), third.task());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_task_fails_when_bank_is_exhausted(harness: Harness) {
    let result = harness.service.request_task(ChatId::new(1), profile("Ada")).await;
    assert!(matches!(
        result,
        Err(AssignmentError::NoTasksAvailable { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_task_never_selects_inactive_or_solved_tasks(harness: Harness) {
    let eligible = seed_task(&harness, "Eligible", "Answer", 10).await;
    let solved = seed_task(&harness, "Solved", "Answer", 10).await;
    seed_inactive_task(&harness, "Inactive").await;
    let clock = DefaultClock;

    // Fresh player per round so the random draw is exercised repeatedly;
    // with the solved task logged beforehand only one choice remains.
    for round in 0..10_i64 {
        let chat = ChatId::new(100 + round);
        let player = Player::register(chat, profile("Scout"), &clock);
        harness
            .players
            .store(&player)
            .await
            .expect("store should succeed");
        harness
            .attempts
            .record(&Attempt::record(
                player.id(),
                solved.id(),
                "answer",
                true,
                &clock,
            ))
            .await
            .expect("record should succeed");

        let handout = harness
            .service
            .request_task(chat, profile("Scout"))
            .await
            .expect("request should succeed");
        assert_eq!(handout.task().id(), eligible.id());
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn correct_answer_awards_points_and_blocks(harness: Harness) {
    let seeded = seed_task(&harness, "Task", "Paris", 25).await;
    let chat = ChatId::new(1);
    harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");

    let verdict = harness
        .service
        .submit_answer(chat, profile("Ada"), "  PARIS ")
        .await
        .expect("submission should succeed");

    assert!(matches!(
        verdict,
        AnswerVerdict::Correct { points_awarded, total_score }
            if points_awarded == seeded.points() && total_score.value() == 25
    ));

    let player = fetch_player(&harness, chat).await;
    assert_eq!(player.score().value(), 25);
    assert_eq!(player.progression(), Progression::Blocked);
    assert_eq!(player.progression().assigned_task(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn incorrect_answer_changes_nothing_but_the_log(harness: Harness) {
    let seeded = seed_task(&harness, "Task", "Paris", 25).await;
    let chat = ChatId::new(1);
    harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");
    let before = fetch_player(&harness, chat).await;

    let verdict = harness
        .service
        .submit_answer(chat, profile("Ada"), "London")
        .await
        .expect("submission should succeed");

    assert_eq!(verdict, AnswerVerdict::Incorrect);

    let after = fetch_player(&harness, chat).await;
    assert_eq!(after.score(), before.score());
    assert_eq!(after.progression(), before.progression());

    let attempts = harness
        .attempts
        .list_for_player(after.id())
        .await
        .expect("listing should succeed");
    assert_eq!(attempts.len(), 1);
    let recorded = attempts.first().expect("one attempt");
    assert_eq!(recorded.task(), seeded.id());
    assert_eq!(recorded.answer_text(), "London");
    assert!(!recorded.is_correct());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blocked_players_never_receive_a_task(harness: Harness) {
    seed_task(&harness, "Task", "Paris", 10).await;
    seed_task(&harness, "Spare", "Paris", 10).await;
    let chat = ChatId::new(1);
    harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");
    harness
        .service
        .submit_answer(chat, profile("Ada"), "Paris")
        .await
        .expect("submission should succeed");

    let result = harness.service.request_task(chat, profile("Ada")).await;

    assert!(matches!(
        result,
        Err(AssignmentError::RequestsBlocked { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blocked_players_cannot_submit_answers(harness: Harness) {
    seed_task(&harness, "Task", "Paris", 10).await;
    let chat = ChatId::new(1);
    harness
        .service
        .request_task(chat, profile("Ada"))
        .await
        .expect("request should succeed");
    harness
        .service
        .submit_answer(chat, profile("Ada"), "Paris")
        .await
        .expect("submission should succeed");

    let result = harness
        .service
        .submit_answer(chat, profile("Ada"), "Paris")
        .await;

    assert!(matches!(
        result,
        Err(AssignmentError::RequestsBlocked { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submitting_without_an_assignment_is_rejected(harness: Harness) {
    seed_task(&harness, "Task", "Paris", 10).await;

    let result = harness
        .service
        .submit_answer(ChatId::new(1), profile("Ada"), "Paris")
        .await;

    assert!(matches!(
        result,
        Err(AssignmentError::NoActiveAssignment { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn answers_against_a_vanished_task_are_incorrect(harness: Harness) {
    // An assignment can dangle if the catalog row disappears underneath it;
    // the evaluator treats that as a wrong answer, not a fault.
    let chat = ChatId::new(1);
    let clock = DefaultClock;
    let mut player = Player::register(chat, profile("Ada"), &clock);
    player
        .begin_task(TaskId::new(), &clock)
        .expect("idle player may begin");
    harness
        .players
        .store(&player)
        .await
        .expect("store should succeed");

    let verdict = harness
        .service
        .submit_answer(chat, profile("Ada"), "anything")
        .await
        .expect("submission should succeed");

    assert_eq!(verdict, AnswerVerdict::Incorrect);
    let attempts = harness
        .attempts
        .list_for_player(player.id())
        .await
        .expect("listing should succeed");
    assert_eq!(attempts.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn check_answer_normalizes_both_sides(harness: Harness) {
    let seeded = seed_task(&harness, "Task", "answer", 10).await;

    let padded = harness
        .service
        .check_answer(seeded.id(), "  ANSWER  ")
        .await
        .expect("check should succeed");
    let plain = harness
        .service
        .check_answer(seeded.id(), "answer")
        .await
        .expect("check should succeed");

    assert_eq!(padded, plain);
    assert!(padded);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn check_answer_treats_unknown_tasks_as_incorrect(harness: Harness) {
    let verdict = harness
        .service
        .check_answer(TaskId::new(), "anything")
        .await
        .expect("check should succeed");
    assert!(!verdict);
}
