//! `login`: the page-load hook. Counts the first visit and the daily streak.

use super::unlocked_suffix;
use crate::badges::BadgeEngine;
use crate::constants::KEY_LOGIN_STREAK;
use crate::database::store::{KeyValueStore, read_count};
use crate::error::Result;
use crate::services::tracking;
use crate::wellbeing::mood::MoodJournal;
use chrono::NaiveDateTime;

pub fn run<S: KeyValueStore>(engine: &mut BadgeEngine<S>, now: NaiveDateTime) -> Result<String> {
    let unlocked = tracking::track_session_start(engine, now)?;
    let streak = read_count(engine.store(), KEY_LOGIN_STREAK);
    let mut out = format!(
        "Willkommen zurück! Login-Streak: {streak} Tag{}{}",
        if streak == 1 { "" } else { "e" },
        unlocked_suffix(&unlocked)
    );
    if MoodJournal::load(engine.store()).needs_entry(now.date()) {
        out.push_str("\nWie geht es dir heute? Trage deine Stimmung mit `mood` ein.");
    }
    Ok(out)
}
