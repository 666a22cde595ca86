use chrono::{Duration, NaiveDate, NaiveDateTime};
use wellbeing_companion::badges::catalog::{
    ARTICLE_READER, CALENDAR_STARTER, EARLY_BIRD, FIRST_FORUM_POST, FIRST_HUGO_EXERCISE,
    FIRST_LOGIN, FORUM_REGULAR, GRADE_PLANNER, HUGO_ALL_CATEGORIES, HUGO_REGULAR, MONTH_STREAK,
    MOOD_TRACKER, PROFILE_COMPLETE, WEEK_STREAK,
};
use wellbeing_companion::badges::{BadgeEngine, Catalog};
use wellbeing_companion::constants::{KEY_HUGO_EXERCISE_COUNT, KEY_LOGIN_STREAK};
use wellbeing_companion::database::store::{KeyValueStore, MemoryStore, read_count};
use wellbeing_companion::services::tracking::*;
use wellbeing_companion::wellbeing::mood::Mood;
use wellbeing_companion::wellbeing::profile::{self, ProfileField};

fn engine() -> BadgeEngine<MemoryStore> {
    BadgeEngine::new(MemoryStore::new(), Catalog::builtin().unwrap())
}

fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 30, 0).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn first_visit_is_counted_once() {
    let mut engine = engine();
    assert_eq!(track_first_login(&mut engine).unwrap(), vec![FIRST_LOGIN]);
    assert!(track_first_login(&mut engine).unwrap().is_empty());
    assert_eq!(engine.exp(), 10);
}

#[test]
fn seven_consecutive_days_earn_the_week_streak() {
    let mut engine = engine();
    for d in 1..=6 {
        let unlocked = track_session_start(&mut engine, at(day(d), 9)).unwrap();
        assert!(!unlocked.contains(&WEEK_STREAK));
    }
    assert_eq!(engine.progress(WEEK_STREAK), 6);
    let unlocked = track_session_start(&mut engine, at(day(7), 9)).unwrap();
    assert_eq!(unlocked, vec![WEEK_STREAK]);
    assert_eq!(engine.exp(), 60);
    assert_eq!(engine.progress(MONTH_STREAK), 7);
}

#[test]
fn repeat_login_on_the_same_day_changes_nothing() {
    let mut engine = engine();
    track_login_streak(&mut engine, at(day(1), 9)).unwrap();
    track_login_streak(&mut engine, at(day(2), 9)).unwrap();
    track_login_streak(&mut engine, at(day(2), 18)).unwrap();
    assert_eq!(read_count(engine.store(), KEY_LOGIN_STREAK), 2);
}

#[test]
fn a_gap_resets_the_streak_but_keeps_best_progress() {
    let mut engine = engine();
    for d in 1..=4 {
        track_login_streak(&mut engine, at(day(d), 9)).unwrap();
    }
    track_login_streak(&mut engine, at(day(4) + Duration::days(3), 9)).unwrap();
    assert_eq!(read_count(engine.store(), KEY_LOGIN_STREAK), 1);
    assert_eq!(engine.progress(WEEK_STREAK), 4);
}

#[test]
fn early_login_earns_early_bird() {
    let mut engine = engine();
    let unlocked = track_login_streak(&mut engine, at(day(1), 6)).unwrap();
    assert_eq!(unlocked, vec![EARLY_BIRD]);

    let mut late = self::engine();
    assert!(track_login_streak(&mut late, at(day(1), 7)).unwrap().is_empty());
}

#[test]
fn mood_counts_distinct_days() {
    let mut engine = engine();
    for d in 1..=6 {
        track_mood_log(&mut engine, day(d), Mood::Good).unwrap();
    }
    track_mood_log(&mut engine, day(6), Mood::Bad).unwrap();
    assert_eq!(engine.progress(MOOD_TRACKER), 6);
    assert!(!engine.is_unlocked(MOOD_TRACKER));

    let unlocked = track_mood_log(&mut engine, day(7), Mood::Great).unwrap();
    assert_eq!(unlocked, vec![MOOD_TRACKER]);
}

#[test]
fn forum_posts_unlock_first_and_regular() {
    let mut engine = engine();
    assert_eq!(track_forum_post(&mut engine).unwrap(), vec![FIRST_FORUM_POST]);
    for _ in 2..10 {
        assert!(track_forum_post(&mut engine).unwrap().is_empty());
    }
    assert_eq!(track_forum_post(&mut engine).unwrap(), vec![FORUM_REGULAR]);
    assert_eq!(engine.exp(), 125);
}

#[test]
fn rereading_an_article_does_not_count() {
    let mut engine = engine();
    track_article_read(&mut engine, "sleep").unwrap();
    track_article_read(&mut engine, "sleep").unwrap();
    assert_eq!(engine.progress(ARTICLE_READER), 1);
    for id in ["exams", "friends", "sport"] {
        track_article_read(&mut engine, id).unwrap();
    }
    assert_eq!(track_article_read(&mut engine, "focus").unwrap(), vec![ARTICLE_READER]);
}

#[test]
fn coping_categories_count_distinct_ids() {
    let mut engine = engine();
    let mut unlocked = Vec::new();
    // The repeated category at call 3 must not count; the fourth distinct one unlocks.
    let steps = [
        ("stress", false),
        ("angst", false),
        ("stress", false),
        ("einsamkeit", false),
        ("ueberforderung", true),
    ];
    for (category, all_done) in steps {
        unlocked.extend(track_coping_exercise(&mut engine, Some(category)).unwrap());
        assert_eq!(engine.is_unlocked(HUGO_ALL_CATEGORIES), all_done, "after {category}");
    }
    assert_eq!(engine.progress(HUGO_ALL_CATEGORIES), 4);
    assert_eq!(unlocked, vec![FIRST_HUGO_EXERCISE, HUGO_ALL_CATEGORIES]);
    assert_eq!(read_count(engine.store(), KEY_HUGO_EXERCISE_COUNT), 5);
    assert_eq!(engine.progress(HUGO_REGULAR), 5);
}

#[test]
fn exercises_without_category_still_count() {
    let mut engine = engine();
    for _ in 0..10 {
        track_coping_exercise(&mut engine, None).unwrap();
    }
    assert!(engine.is_unlocked(HUGO_REGULAR));
    assert_eq!(engine.progress(HUGO_ALL_CATEGORIES), 0);
}

#[test]
fn single_shot_trackers() {
    let mut engine = engine();
    assert_eq!(track_grade_entry(&mut engine).unwrap(), vec![GRADE_PLANNER]);
    assert!(track_grade_entry(&mut engine).unwrap().is_empty());
    assert_eq!(track_calendar_event(&mut engine).unwrap(), vec![CALENDAR_STARTER]);
    assert_eq!(engine.exp(), 35);
}

#[test]
fn profile_badge_needs_every_required_field() {
    let mut engine = engine();
    for field in &ProfileField::REQUIRED[..5] {
        profile::set_field(engine.store_mut(), *field, "x");
    }
    assert!(track_profile_complete(&mut engine).unwrap().is_empty());

    profile::set_field(engine.store_mut(), ProfileField::ProfileImage, "data:image/png;base64,AA");
    assert_eq!(track_profile_complete(&mut engine).unwrap(), vec![PROFILE_COMPLETE]);
    assert!(track_profile_complete(&mut engine).unwrap().is_empty());
    assert!(engine.store().get(ProfileField::Bio.key()).is_none());
}
