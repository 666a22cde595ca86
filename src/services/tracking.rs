//! One tracker per feature area. Each turns a domain event into counter
//! updates and badge awards, and returns the badges it newly unlocked.
//!
//! "Record" trackers count an occurrence and must be called once per event.
//! [`track_profile_complete`] recomputes from current state and is safe to
//! call any number of times. EXP is never granted twice either way, because
//! awarding a badge is idempotent.

use crate::badges::catalog::{
    CALENDAR_STARTER, EARLY_BIRD, FIRST_FORUM_POST, FIRST_HUGO_EXERCISE, FIRST_LOGIN,
    GRADE_PLANNER, PROFILE_COMPLETE,
};
use crate::badges::{BadgeEngine, Counter};
use crate::constants::{
    EARLY_BIRD_HOUR, KEY_FORUM_POST_COUNT, KEY_HAS_VISITED, KEY_HUGO_CATEGORIES,
    KEY_HUGO_EXERCISE_COUNT, KEY_LAST_LOGIN_DATE, KEY_LOGIN_STREAK, KEY_READ_ARTICLES,
};
use crate::database::store::{KeyValueStore, read_count, read_json, write_count, write_json};
use crate::error::Result;
use crate::wellbeing::calendar::{date_key, parse_date};
use crate::wellbeing::mood::{Mood, MoodJournal};
use crate::wellbeing::profile;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use tracing::{debug, instrument};

pub type Unlocked = Vec<&'static str>;

fn award_new<S: KeyValueStore>(engine: &mut BadgeEngine<S>, badge_id: &'static str, out: &mut Unlocked) -> Result<()> {
    if engine.award(badge_id)?.is_new() {
        out.push(badge_id);
    }
    Ok(())
}

fn usize_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Page-load pair: first-visit check, then the daily streak.
pub fn track_session_start<S: KeyValueStore>(engine: &mut BadgeEngine<S>, now: NaiveDateTime) -> Result<Unlocked> {
    let mut unlocked = track_first_login(engine)?;
    unlocked.extend(track_login_streak(engine, now)?);
    Ok(unlocked)
}

pub fn track_first_login<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> Result<Unlocked> {
    let mut unlocked = Vec::new();
    if engine.store().get(KEY_HAS_VISITED).is_none() {
        engine.store_mut().set(KEY_HAS_VISITED, "true".to_string());
        award_new(engine, FIRST_LOGIN, &mut unlocked)?;
    }
    Ok(unlocked)
}

/// Streak after a login on `today`, given the previously stored login day.
///
/// Consecutive day increments, a gap resets to 1, and a repeat login on the
/// same day leaves the streak as it was.
pub fn next_streak(last_login: Option<NaiveDate>, current: u32, today: NaiveDate) -> u32 {
    match last_login {
        Some(last) if last == today => current.max(1),
        Some(last) if last + Duration::days(1) == today => current.saturating_add(1),
        _ => 1,
    }
}

#[instrument(level = "debug", skip(engine))]
pub fn track_login_streak<S: KeyValueStore>(engine: &mut BadgeEngine<S>, now: NaiveDateTime) -> Result<Unlocked> {
    let today = now.date();
    let last_login = engine
        .store()
        .get(KEY_LAST_LOGIN_DATE)
        .and_then(|raw| parse_date(&raw).ok());
    if last_login == Some(today) {
        debug!(target = "tracking.login", "already counted today");
        return Ok(Vec::new());
    }

    let current = read_count(engine.store(), KEY_LOGIN_STREAK);
    let streak = next_streak(last_login, current, today);
    engine.store_mut().set(KEY_LAST_LOGIN_DATE, date_key(today));
    write_count(engine.store_mut(), KEY_LOGIN_STREAK, streak);
    debug!(target = "tracking.login", streak, "streak updated");

    let mut unlocked = engine.sync_counter(Counter::LoginStreak, streak)?;
    if now.hour() < EARLY_BIRD_HOUR {
        award_new(engine, EARLY_BIRD, &mut unlocked)?;
    }
    Ok(unlocked)
}

/// Record the mood of `date`. Only the first entry for a day adds a tracked day.
pub fn track_mood_log<S: KeyValueStore>(engine: &mut BadgeEngine<S>, date: NaiveDate, mood: Mood) -> Result<Unlocked> {
    let mut journal = MoodJournal::load(engine.store());
    let new_day = journal.record(date, mood);
    journal.save(engine.store_mut());
    debug!(target = "tracking.mood", date = %date, mood = %mood, new_day);
    engine.sync_counter(Counter::MoodDays, usize_count(journal.tracked_days()))
}

pub fn track_forum_post<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> Result<Unlocked> {
    let posts = read_count(engine.store(), KEY_FORUM_POST_COUNT).saturating_add(1);
    write_count(engine.store_mut(), KEY_FORUM_POST_COUNT, posts);

    let mut unlocked = Vec::new();
    award_new(engine, FIRST_FORUM_POST, &mut unlocked)?;
    unlocked.extend(engine.sync_counter(Counter::ForumPosts, posts)?);
    Ok(unlocked)
}

/// Count a distinct article. Re-reading an article changes nothing.
pub fn track_article_read<S: KeyValueStore>(engine: &mut BadgeEngine<S>, article_id: &str) -> Result<Unlocked> {
    let mut read: Vec<String> = read_json(engine.store(), KEY_READ_ARTICLES);
    if read.iter().any(|a| a == article_id) {
        return Ok(Vec::new());
    }
    read.push(article_id.to_string());
    write_json(engine.store_mut(), KEY_READ_ARTICLES, &read);
    engine.sync_counter(Counter::ArticlesRead, usize_count(read.len()))
}

pub fn track_grade_entry<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> Result<Unlocked> {
    let mut unlocked = Vec::new();
    award_new(engine, GRADE_PLANNER, &mut unlocked)?;
    Ok(unlocked)
}

pub fn track_calendar_event<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> Result<Unlocked> {
    let mut unlocked = Vec::new();
    award_new(engine, CALENDAR_STARTER, &mut unlocked)?;
    Ok(unlocked)
}

/// Record a finished coping exercise, optionally in a category.
#[instrument(level = "debug", skip(engine))]
pub fn track_coping_exercise<S: KeyValueStore>(engine: &mut BadgeEngine<S>, category: Option<&str>) -> Result<Unlocked> {
    let exercises = read_count(engine.store(), KEY_HUGO_EXERCISE_COUNT).saturating_add(1);
    write_count(engine.store_mut(), KEY_HUGO_EXERCISE_COUNT, exercises);

    let mut unlocked = Vec::new();
    award_new(engine, FIRST_HUGO_EXERCISE, &mut unlocked)?;
    unlocked.extend(engine.sync_counter(Counter::CopingExercises, exercises)?);

    if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
        let mut used: Vec<String> = read_json(engine.store(), KEY_HUGO_CATEGORIES);
        if !used.iter().any(|c| c == category) {
            used.push(category.to_string());
            write_json(engine.store_mut(), KEY_HUGO_CATEGORIES, &used);
            unlocked.extend(engine.sync_counter(Counter::CopingCategories, usize_count(used.len()))?);
        }
    }
    Ok(unlocked)
}

/// Snapshot check: awards the badge once every required profile field is filled.
pub fn track_profile_complete<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> Result<Unlocked> {
    let mut unlocked = Vec::new();
    if profile::is_complete(engine.store()) {
        award_new(engine, PROFILE_COMPLETE, &mut unlocked)?;
    }
    Ok(unlocked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn streak_rules() {
        let today = day(2026, 3, 1);
        assert_eq!(next_streak(None, 0, today), 1);
        // Feb 28 2026 is the day before Mar 1.
        assert_eq!(next_streak(Some(day(2026, 2, 28)), 4, today), 5);
        assert_eq!(next_streak(Some(day(2026, 2, 27)), 4, today), 1);
        assert_eq!(next_streak(Some(today), 4, today), 4);
    }
}
