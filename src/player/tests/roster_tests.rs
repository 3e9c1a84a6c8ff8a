//! Service orchestration tests for player registration and statistics.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::catalog::domain::TaskId;
use crate::player::{
    adapters::memory::{InMemoryAttemptLog, InMemoryPlayerRepository},
    domain::{Attempt, ChatId, ChatProfile, DisplayName, Handle},
    ports::AttemptLog,
    services::PlayerRosterService,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService =
    PlayerRosterService<InMemoryPlayerRepository, InMemoryAttemptLog, DefaultClock>;

struct Harness {
    service: TestService,
    attempts: Arc<InMemoryAttemptLog>,
}

#[fixture]
fn harness() -> Harness {
    let players = Arc::new(InMemoryPlayerRepository::new());
    let attempts = Arc::new(InMemoryAttemptLog::new());
    let service = PlayerRosterService::new(players, Arc::clone(&attempts), Arc::new(DefaultClock));
    Harness { service, attempts }
}

fn profile(name: &str) -> ChatProfile {
    ChatProfile::new(DisplayName::new(name).expect("valid name"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_or_fetch_registers_once(harness: Harness) {
    let chat = ChatId::new(7);

    let first = harness
        .service
        .register_or_fetch(chat, profile("Ada"))
        .await
        .expect("registration should succeed");
    let second = harness
        .service
        .register_or_fetch(chat, profile("Ada Renamed"))
        .await
        .expect("fetch should succeed");

    assert_eq!(first, second);
    assert_eq!(second.display_name().as_str(), "Ada");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_or_fetch_keeps_distinct_chats_separate(harness: Harness) {
    let ada = harness
        .service
        .register_or_fetch(ChatId::new(1), profile("Ada"))
        .await
        .expect("registration should succeed");
    let grace = harness
        .service
        .register_or_fetch(ChatId::new(2), profile("Grace"))
        .await
        .expect("registration should succeed");

    assert_ne!(ada.id(), grace.id());
    let listing = harness
        .service
        .list_players()
        .await
        .expect("listing should succeed");
    assert_eq!(listing.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_are_absent_for_unknown_chats(harness: Harness) {
    let stats = harness
        .service
        .stats(ChatId::new(404))
        .await
        .expect("stats lookup should succeed");
    assert!(stats.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_count_only_correct_attempts(harness: Harness) {
    let chat = ChatId::new(9);
    let player = harness
        .service
        .register_or_fetch(chat, profile("Ada").with_handle(Handle::new("ada").expect("valid")))
        .await
        .expect("registration should succeed");

    let clock = DefaultClock;
    let solved_task = TaskId::new();
    harness
        .attempts
        .record(&Attempt::record(player.id(), solved_task, "wrong", false, &clock))
        .await
        .expect("record should succeed");
    harness
        .attempts
        .record(&Attempt::record(player.id(), solved_task, "right", true, &clock))
        .await
        .expect("record should succeed");

    let stats = harness
        .service
        .stats(chat)
        .await
        .expect("stats lookup should succeed")
        .expect("player exists");

    assert_eq!(stats.solved_count, 1);
    assert!(stats.may_request);
    assert_eq!(stats.current_task, None);
}
