use std::time::Duration;

use anyhow::bail;
use async_trait::async_trait;

use super::*;
use crate::provider::StaticRoster;
use arena_battle::{BaseStats, CreatureDetail};

/// Roster whose fetches take `delay` of (paused) tokio time
struct SlowRoster {
    roster: StaticRoster,
    delay: Duration,
}

#[async_trait]
impl RosterProvider for SlowRoster {
    async fn list_roster(&self) -> anyhow::Result<Vec<CreatureSummary>> {
        self.roster.list_roster().await
    }

    async fn fetch_detail(&self, id: &str) -> anyhow::Result<CreatureDetail> {
        tokio::time::sleep(self.delay).await;
        self.roster.fetch_detail(id).await
    }
}

/// Provider whose every call fails
struct BrokenCatalog;

#[async_trait]
impl RosterProvider for BrokenCatalog {
    async fn list_roster(&self) -> anyhow::Result<Vec<CreatureSummary>> {
        bail!("catalog unavailable")
    }

    async fn fetch_detail(&self, _id: &str) -> anyhow::Result<CreatureDetail> {
        bail!("catalog unavailable")
    }
}

/// Provider that never answers
struct SilentCatalog;

#[async_trait]
impl RosterProvider for SilentCatalog {
    async fn list_roster(&self) -> anyhow::Result<Vec<CreatureSummary>> {
        std::future::pending().await
    }

    async fn fetch_detail(&self, _id: &str) -> anyhow::Result<CreatureDetail> {
        std::future::pending().await
    }
}

fn bulbasaur() -> CreatureDetail {
    CreatureDetail::new("bulbasaur", BaseStats::new(45, 49, 49, 65, 65, 45))
}

fn weaker() -> CreatureDetail {
    CreatureDetail::new("weaker", BaseStats::new(40, 48, 48, 48, 48, 48))
}

fn roster() -> StaticRoster {
    StaticRoster::new([bulbasaur(), weaker()])
}

fn session() -> (ArenaSession, EventReceiver) {
    ArenaSession::new(roster(), SessionConfig::default())
}

fn emptied(slot: PlayerSlot) -> ArenaEvent {
    ArenaEvent::SlotChanged {
        slot,
        creature: None,
    }
}

async fn ready(p1: &str, p2: &str) -> (ArenaSession, EventReceiver) {
    let (session, mut events) = session();
    session.select_creature(PlayerSlot::Player1, p1).await.unwrap();
    session.select_creature(PlayerSlot::Player2, p2).await.unwrap();
    events.drain();
    (session, events)
}

#[tokio::test(start_paused = true)]
async fn test_list_roster() {
    let (session, _events) = session();
    let roster = session.list_roster().await.unwrap();
    let names: Vec<_> = roster.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "weaker"]);
}

#[tokio::test(start_paused = true)]
async fn test_list_roster_failure() {
    let (session, _events) = ArenaSession::new(BrokenCatalog, SessionConfig::default());
    let err = session.list_roster().await.unwrap_err();
    assert!(matches!(err, ArenaError::RosterFetchFailed { .. }));
    assert!(err.creature_id().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_list_roster_timeout() {
    let (session, _events) = ArenaSession::new(SilentCatalog, SessionConfig::default());
    let err = session.list_roster().await.unwrap_err();
    assert!(matches!(err, ArenaError::RosterFetchFailed { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_select_fills_slot_and_emits() {
    let (session, mut events) = session();

    let outcome = session
        .select_creature(PlayerSlot::Player2, "bulbasaur")
        .await
        .unwrap();

    assert_eq!(outcome, Selection::Filled(PlayerSlot::Player2));
    let state = session.snapshot();
    assert_eq!(state.creature(PlayerSlot::Player2), Some(&bulbasaur()));
    assert!(state.slot(PlayerSlot::Player1).is_empty());
    assert_eq!(
        events.drain(),
        vec![ArenaEvent::SlotChanged {
            slot: PlayerSlot::Player2,
            creature: Some(bulbasaur()),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_choose_follows_fill_order() {
    let (session, _events) = session();

    assert_eq!(session.next_empty_slot(), Some(PlayerSlot::Player1));
    assert_eq!(
        session.choose("weaker").await.unwrap(),
        Selection::Filled(PlayerSlot::Player1)
    );
    assert_eq!(session.next_empty_slot(), Some(PlayerSlot::Player2));
    assert_eq!(
        session.choose("bulbasaur").await.unwrap(),
        Selection::Filled(PlayerSlot::Player2)
    );
    assert_eq!(session.next_empty_slot(), None);

    let before = session.snapshot();
    assert_eq!(session.choose("bulbasaur").await.unwrap(), Selection::Declined);
    assert_eq!(session.snapshot(), before);
}

#[tokio::test(start_paused = true)]
async fn test_select_into_occupied_slot_is_noop() {
    let (session, mut events) = ready("bulbasaur", "weaker").await;
    session.battle().unwrap().verdict().await;
    events.drain();
    let before = session.snapshot();

    let outcome = session
        .select_creature(PlayerSlot::Player1, "weaker")
        .await
        .unwrap();

    assert_eq!(outcome, Selection::Declined);
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.snapshot().verdict(), Some(Verdict::Player1Wins));
    assert!(events.drain().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_pending_slot_rejects_second_fetch() {
    let slow = SlowRoster {
        roster: roster(),
        delay: Duration::from_secs(1),
    };
    let (session, _events) = ArenaSession::new(slow, SessionConfig::default());

    let first = tokio::spawn({
        let session = session.clone();
        async move { session.select_creature(PlayerSlot::Player1, "bulbasaur").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(session.snapshot().slot(PlayerSlot::Player1).is_pending());
    assert_eq!(session.next_empty_slot(), Some(PlayerSlot::Player2));

    let second = session
        .select_creature(PlayerSlot::Player1, "weaker")
        .await
        .unwrap();
    assert_eq!(second, Selection::Declined);

    assert_eq!(
        first.await.unwrap().unwrap(),
        Selection::Filled(PlayerSlot::Player1)
    );
    assert_eq!(
        session.snapshot().creature(PlayerSlot::Player1),
        Some(&bulbasaur())
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_fetch_leaves_slot_empty() {
    let (session, mut events) = session();

    let err = session
        .select_creature(PlayerSlot::Player1, "missingno")
        .await
        .unwrap_err();

    assert!(matches!(&err, ArenaError::DetailFetchFailed { id, .. } if id == "missingno"));
    assert_eq!(err.creature_id(), Some("missingno"));
    assert!(session.snapshot().is_clear());
    assert!(events.drain().is_empty());

    // The user can retry
    assert_eq!(
        session
            .select_creature(PlayerSlot::Player1, "bulbasaur")
            .await
            .unwrap(),
        Selection::Filled(PlayerSlot::Player1)
    );
}

#[tokio::test(start_paused = true)]
async fn test_fetch_timeout_is_a_failure() {
    let config = SessionConfig::default().with_fetch_timeout(Duration::from_secs(2));
    let (session, _events) = ArenaSession::new(SilentCatalog, config);

    let err = session
        .select_creature(PlayerSlot::Player2, "bulbasaur")
        .await
        .unwrap_err();

    assert!(matches!(err, ArenaError::DetailFetchFailed { .. }));
    assert!(session.snapshot().slot(PlayerSlot::Player2).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_inflight_fetch() {
    let slow = SlowRoster {
        roster: roster(),
        delay: Duration::from_secs(1),
    };
    let (session, mut events) = ArenaSession::new(slow, SessionConfig::default());

    let pending = tokio::spawn({
        let session = session.clone();
        async move { session.choose("bulbasaur").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(session.snapshot().slot(PlayerSlot::Player1).is_pending());

    session.reset();

    assert_eq!(pending.await.unwrap().unwrap(), Selection::Cancelled);
    assert!(session.snapshot().is_clear());
    assert_eq!(events.drain(), vec![ArenaEvent::Cleared]);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_fetch_releases_slot() {
    let slow = SlowRoster {
        roster: roster(),
        delay: Duration::from_secs(5),
    };
    let (session, mut events) = ArenaSession::new(slow, SessionConfig::default());

    let gave_up = tokio::time::timeout(
        Duration::from_secs(1),
        session.select_creature(PlayerSlot::Player1, "bulbasaur"),
    )
    .await;
    assert!(gave_up.is_err());

    tokio::time::sleep(Duration::from_secs(60)).await;
    let state = session.snapshot();
    assert!(state.slot(PlayerSlot::Player1).is_empty());
    assert_eq!(session.next_empty_slot(), Some(PlayerSlot::Player1));
    assert!(events.drain().is_empty());

    assert_eq!(
        session
            .select_creature(PlayerSlot::Player1, "bulbasaur")
            .await
            .unwrap(),
        Selection::Filled(PlayerSlot::Player1)
    );
}

#[tokio::test(start_paused = true)]
async fn test_aborted_fetch_task_releases_slot() {
    let (session, _events) = ArenaSession::new(SilentCatalog, SessionConfig::default());

    let task = tokio::spawn({
        let session = session.clone();
        async move { session.select_creature(PlayerSlot::Player2, "bulbasaur").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(session.snapshot().slot(PlayerSlot::Player2).is_pending());

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());

    assert!(session.snapshot().slot(PlayerSlot::Player2).is_empty());
    assert!(session.snapshot().slot(PlayerSlot::Player1).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dropped_stale_fetch_keeps_newer_selection() {
    let slow = SlowRoster {
        roster: roster(),
        delay: Duration::from_secs(5),
    };
    let (session, _events) = ArenaSession::new(slow, SessionConfig::default());

    let first = tokio::spawn({
        let session = session.clone();
        async move { session.select_creature(PlayerSlot::Player1, "bulbasaur").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    // A reset leaves the old fetch behind; a new selection takes the slot
    session.reset();
    let second = tokio::spawn({
        let session = session.clone();
        async move { session.select_creature(PlayerSlot::Player1, "weaker").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(first.await.unwrap().unwrap(), Selection::Cancelled);
    assert!(session.snapshot().slot(PlayerSlot::Player1).is_pending());

    assert_eq!(
        second.await.unwrap().unwrap(),
        Selection::Filled(PlayerSlot::Player1)
    );
    assert_eq!(session.snapshot().creature(PlayerSlot::Player1), Some(&weaker()));
}

#[tokio::test(start_paused = true)]
async fn test_battle_requires_both_slots() {
    let (session, mut events) = session();
    session
        .select_creature(PlayerSlot::Player1, "bulbasaur")
        .await
        .unwrap();
    events.drain();
    let before = session.snapshot();

    assert!(session.battle().is_none());

    let after = session.snapshot();
    assert_eq!(after, before);
    assert!(!after.is_resolving());
    assert!(after.verdict().is_none());
    assert!(events.drain().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_resolution_sequencing() {
    let (session, mut events) = ready("bulbasaur", "weaker").await;

    let resolution = session.battle().unwrap();

    let started = session.snapshot();
    assert!(started.is_resolving());
    assert!(started.verdict().is_none());
    assert_eq!(events.drain(), vec![ArenaEvent::ResolutionStarted]);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(session.snapshot().is_resolving());
    assert!(events.drain().is_empty());

    assert_eq!(resolution.verdict().await, Some(Verdict::Player1Wins));

    let done = session.snapshot();
    assert!(!done.is_resolving());
    assert_eq!(done.verdict(), Some(Verdict::Player1Wins));
    assert_eq!(
        events.drain(),
        vec![ArenaEvent::VerdictPublished(Verdict::Player1Wins)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_dwell_lasts_the_configured_delay() {
    let config = SessionConfig::default().with_resolution_delay(Duration::from_secs(3));
    let (session, _events) = ArenaSession::new(roster(), config);
    session.choose("weaker").await.unwrap();
    session.choose("bulbasaur").await.unwrap();

    let start = tokio::time::Instant::now();
    let verdict = session.battle().unwrap().verdict().await;

    assert_eq!(verdict, Some(Verdict::Player2Wins));
    assert!(start.elapsed() >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_no_second_battle_while_resolving() {
    let (session, mut events) = ready("bulbasaur", "weaker").await;

    let first = session.battle().unwrap();
    assert!(session.battle().is_none());
    assert_eq!(events.drain(), vec![ArenaEvent::ResolutionStarted]);

    assert_eq!(first.verdict().await, Some(Verdict::Player1Wins));
}

#[tokio::test(start_paused = true)]
async fn test_identical_creatures_draw() {
    let (session, _events) = ready("bulbasaur", "bulbasaur").await;
    assert_eq!(
        session.battle().unwrap().verdict().await,
        Some(Verdict::Draw)
    );
}

#[tokio::test(start_paused = true)]
async fn test_rebattle_clears_verdict_first() {
    let (session, mut events) = ready("weaker", "bulbasaur").await;
    session.battle().unwrap().verdict().await;
    events.drain();

    let again = session.battle().unwrap();
    assert!(session.snapshot().verdict().is_none());
    assert_eq!(again.verdict().await, Some(Verdict::Player2Wins));
    assert_eq!(
        events.drain(),
        vec![
            ArenaEvent::ResolutionStarted,
            ArenaEvent::VerdictPublished(Verdict::Player2Wins),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_reset_during_resolution_cancels_verdict() {
    let (session, mut events) = ready("bulbasaur", "weaker").await;

    let resolution = session.battle().unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    session.reset();

    assert_eq!(resolution.verdict().await, None);

    // Nothing lands after the dwell would have ended either
    tokio::time::sleep(Duration::from_secs(2)).await;
    let state = session.snapshot();
    assert!(state.is_clear());
    assert_eq!(
        events.drain(),
        vec![
            ArenaEvent::ResolutionStarted,
            emptied(PlayerSlot::Player1),
            emptied(PlayerSlot::Player2),
            ArenaEvent::Cleared,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_reset_is_idempotent() {
    let (session, mut events) = ready("bulbasaur", "weaker").await;

    session.reset();
    let once = session.snapshot();
    session.reset();
    let twice = session.snapshot();

    assert!(once.is_clear());
    assert_eq!(once, twice);
    assert_eq!(
        events.drain(),
        vec![
            emptied(PlayerSlot::Player1),
            emptied(PlayerSlot::Player2),
            ArenaEvent::Cleared,
            ArenaEvent::Cleared,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_events_survive_dropped_receiver() {
    let (session, events) = session();
    drop(events);

    session.choose("bulbasaur").await.unwrap();
    session.choose("weaker").await.unwrap();
    assert_eq!(
        session.battle().unwrap().verdict().await,
        Some(Verdict::Player1Wins)
    );
}
