//! Domain-focused tests for player identity and attempt records.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::catalog::domain::{Points, TaskId};
use crate::player::domain::{
    Attempt, ChatId, ChatProfile, DisplayName, Handle, Player, PlayerDomainError, PlayerId,
    Progression, Score,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn display_name_is_trimmed() {
    let name = DisplayName::new("  Ada Lovelace  ").expect("valid name");
    assert_eq!(name.as_str(), "Ada Lovelace");
}

#[rstest]
#[case("")]
#[case("   ")]
fn display_name_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(
        DisplayName::new(raw),
        Err(PlayerDomainError::EmptyDisplayName)
    );
}

#[rstest]
#[case("@ada", "ada")]
#[case("ada", "ada")]
#[case("  @ada  ", "ada")]
fn handle_strips_one_leading_at_sign(#[case] raw: &str, #[case] expected: &str) {
    let handle = Handle::new(raw).expect("valid handle");
    assert_eq!(handle.as_str(), expected);
}

#[rstest]
#[case("@")]
#[case("  ")]
fn handle_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(Handle::new(raw), Err(PlayerDomainError::EmptyHandle));
}

#[rstest]
fn registration_starts_idle_with_zero_score(clock: DefaultClock) {
    let profile = ChatProfile::new(DisplayName::new("Ada").expect("valid name"))
        .with_handle(Handle::new("@ada").expect("valid handle"));

    let player = Player::register(ChatId::new(42), profile, &clock);

    assert_eq!(player.chat_id(), ChatId::new(42));
    assert_eq!(player.score(), Score::zero());
    assert_eq!(player.progression(), Progression::Idle);
    assert_eq!(player.handle().map(Handle::as_str), Some("ada"));
    assert_eq!(player.created_at(), player.updated_at());
}

#[rstest]
fn score_awards_accumulate(clock: DefaultClock) {
    let profile = ChatProfile::new(DisplayName::new("Ada").expect("valid name"));
    let mut player = Player::register(ChatId::new(42), profile, &clock);

    player.force_assign(TaskId::new(), &clock);
    player
        .complete_task(Points::new(10).expect("valid points"), &clock)
        .expect("completion succeeds");
    player.unlock(&clock);
    player.force_assign(TaskId::new(), &clock);
    player
        .complete_task(Points::new(15).expect("valid points"), &clock)
        .expect("completion succeeds");

    assert_eq!(player.score().value(), 25);
}

#[rstest]
fn attempt_record_captures_submission(clock: DefaultClock) {
    let player = PlayerId::new();
    let task = TaskId::new();

    let attempt = Attempt::record(player, task, "my answer", false, &clock);

    assert_eq!(attempt.player(), player);
    assert_eq!(attempt.task(), task);
    assert_eq!(attempt.answer_text(), "my answer");
    assert!(!attempt.is_correct());
}
