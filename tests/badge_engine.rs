use proptest::prelude::*;
use wellbeing_companion::badges::catalog::{
    BADGES, BadgeDefinition, FIRST_LOGIN, GRADE_PLANNER, MOOD_MASTER, WEEK_STREAK,
};
use wellbeing_companion::badges::{BadgeEngine, Catalog, Counter, Delivery, UnlockOutcome};
use wellbeing_companion::constants::{KEY_BADGE_PROGRESS, KEY_UNLOCKED_BADGES, KEY_USER_EXP};
use wellbeing_companion::database::store::{KeyValueStore, MemoryStore};
use wellbeing_companion::error::Error;

fn engine() -> BadgeEngine<MemoryStore> {
    BadgeEngine::new(MemoryStore::new(), Catalog::builtin().unwrap())
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), BADGES.len());
    assert_eq!(catalog.get(FIRST_LOGIN).unwrap().exp_reward, 10);
    assert_eq!(catalog.bound_to(Counter::LoginStreak).count(), 2);
}

static DUPLICATED: [BadgeDefinition; 2] = [
    BadgeDefinition {
        id: "twice",
        name: "Twice",
        description: "",
        exp_reward: 5,
        max_progress: None,
        counter: None,
    },
    BadgeDefinition {
        id: "twice",
        name: "Twice again",
        description: "",
        exp_reward: 5,
        max_progress: None,
        counter: None,
    },
];

static UNBOUNDED: [BadgeDefinition; 1] = [BadgeDefinition {
    id: "loose",
    name: "Loose",
    description: "",
    exp_reward: 5,
    max_progress: None,
    counter: Some(Counter::ForumPosts),
}];

#[test]
fn catalog_rejects_bad_tables() {
    assert_eq!(Catalog::new(&DUPLICATED).unwrap_err(), Error::DuplicateBadge("twice"));
    assert!(matches!(
        Catalog::new(&UNBOUNDED),
        Err(Error::InvalidBadge { id: "loose", .. })
    ));
}

#[test]
fn first_login_then_week_streak() {
    let mut engine = engine();
    assert_eq!(engine.unlock(FIRST_LOGIN).unwrap(), UnlockOutcome::Unlocked);
    assert_eq!(engine.exp(), 10);
    assert_eq!(engine.level().level, 1);

    let outcome = engine.update_progress(WEEK_STREAK, 7).unwrap();
    assert_eq!(outcome, Some(UnlockOutcome::Unlocked));
    assert_eq!(engine.exp(), 60);

    assert_eq!(engine.unlock(WEEK_STREAK).unwrap(), UnlockOutcome::AlreadyUnlocked);
    assert_eq!(engine.exp(), 60);
    assert_eq!(engine.unlocked_count(), 2);
}

#[test]
fn progress_below_threshold_does_not_unlock() {
    let mut engine = engine();
    assert_eq!(engine.update_progress(WEEK_STREAK, 6).unwrap(), None);
    assert!(!engine.is_unlocked(WEEK_STREAK));
    assert_eq!(engine.progress(WEEK_STREAK), 6);
    assert_eq!(engine.exp(), 0);
}

#[test]
fn stored_progress_never_decreases() {
    let mut engine = engine();
    engine.update_progress(MOOD_MASTER, 12).unwrap();
    engine.update_progress(MOOD_MASTER, 3).unwrap();
    assert_eq!(engine.progress(MOOD_MASTER), 12);
}

#[test]
fn unknown_ids_fail_without_writing() {
    let mut engine = engine();
    assert_eq!(engine.unlock("nope"), Err(Error::UnknownBadge("nope".into())));
    assert_eq!(engine.update_progress("nope", 3), Err(Error::UnknownBadge("nope".into())));
    assert!(engine.publish_notification("nope").is_err());
    assert!(!engine.store().has_changes());
    assert_eq!(engine.store().get(KEY_BADGE_PROGRESS), None);
    assert_eq!(engine.exp(), 0);
}

#[test]
fn malformed_payloads_read_as_empty() {
    let store = MemoryStore::from_entries([
        (KEY_UNLOCKED_BADGES.to_string(), "{not json".to_string()),
        (KEY_BADGE_PROGRESS.to_string(), "[1,2]".to_string()),
        (KEY_USER_EXP.to_string(), "lots".to_string()),
    ]);
    let mut engine = BadgeEngine::new(store, Catalog::builtin().unwrap());
    assert_eq!(engine.exp(), 0);
    assert_eq!(engine.progress(WEEK_STREAK), 0);
    assert!(!engine.is_unlocked(FIRST_LOGIN));

    assert_eq!(engine.unlock(FIRST_LOGIN).unwrap(), UnlockOutcome::Unlocked);
    assert_eq!(engine.exp(), 10);
    assert!(engine.is_unlocked(FIRST_LOGIN));
}

#[test]
fn unlocked_badges_are_persisted_as_a_json_map() {
    let mut engine = engine();
    engine.unlock(GRADE_PLANNER).unwrap();
    let raw = engine.store().get(KEY_UNLOCKED_BADGES).unwrap();
    assert_eq!(raw, r#"{"grade_planner":true}"#);
    assert_eq!(engine.store().get(KEY_USER_EXP).as_deref(), Some("20"));
}

#[test]
fn queued_notifications_come_out_in_order_once() {
    let mut engine = engine();
    engine.award(FIRST_LOGIN).unwrap();
    engine.award(GRADE_PLANNER).unwrap();
    engine.award(FIRST_LOGIN).unwrap();

    assert_eq!(engine.pending_notifications().len(), 2);
    assert_eq!(engine.consume_notification().unwrap().badge_id, FIRST_LOGIN);
    let second = engine.consume_notification().unwrap();
    assert_eq!(second.badge_id, GRADE_PLANNER);
    assert_eq!(second.exp_reward, 20);
    assert_eq!(engine.consume_notification(), None);
}

#[test]
fn unlock_alone_does_not_notify() {
    let mut engine = engine();
    engine.unlock(FIRST_LOGIN).unwrap();
    assert!(engine.pending_notifications().is_empty());
}

#[tokio::test]
async fn live_listener_gets_notifications_directly() {
    let mut engine = engine();
    let mut rx = engine.subscribe();
    assert_eq!(engine.publish_notification(FIRST_LOGIN).unwrap(), Delivery::Live);
    engine.award(WEEK_STREAK).unwrap();

    assert_eq!(rx.recv().await.unwrap().badge_id, FIRST_LOGIN);
    let n = rx.recv().await.unwrap();
    assert_eq!(n.badge_id, WEEK_STREAK);
    assert_eq!(n.exp_reward, 50);
    assert!(engine.pending_notifications().is_empty());

    drop(rx);
    assert_eq!(engine.publish_notification(FIRST_LOGIN).unwrap(), Delivery::Queued);
}

proptest! {
    #[test]
    fn exp_is_the_sum_of_distinct_unlocks(picks in prop::collection::vec(0usize..BADGES.len(), 0..40)) {
        let mut engine = engine();
        let mut seen = std::collections::HashSet::new();
        let mut expected = 0u32;
        let mut last = 0u32;
        for i in picks {
            let badge = &BADGES[i];
            let outcome = engine.award(badge.id).unwrap();
            prop_assert_eq!(outcome.is_new(), seen.insert(badge.id));
            if outcome.is_new() {
                expected += badge.exp_reward;
            }
            prop_assert!(engine.exp() >= last);
            last = engine.exp();
        }
        prop_assert_eq!(engine.exp(), expected);
        prop_assert_eq!(engine.pending_notifications().len(), seen.len());
    }

    #[test]
    fn progress_keeps_the_maximum(values in prop::collection::vec(0u32..60, 1..20)) {
        let mut engine = engine();
        for v in &values {
            engine.update_progress(MOOD_MASTER, *v).unwrap();
        }
        let max = *values.iter().max().unwrap();
        prop_assert_eq!(engine.progress(MOOD_MASTER), max);
        prop_assert_eq!(engine.is_unlocked(MOOD_MASTER), max >= 30);
    }
}
