//! `mood`: record today's (or a past day's) mood, or show a month summary.

use super::unlocked_suffix;
use crate::badges::BadgeEngine;
use crate::database::store::KeyValueStore;
use crate::error::{Error, Result};
use crate::services::tracking;
use crate::wellbeing::calendar::{is_future_day, parse_date};
use crate::wellbeing::mood::{Mood, MoodJournal};
use chrono::{Datelike, NaiveDate};

pub fn run<S: KeyValueStore>(engine: &mut BadgeEngine<S>, args: &[&str], today: NaiveDate) -> Result<String> {
    match args {
        [] => Ok(format!(
            "Usage: mood <{}> [YYYY-MM-DD] | mood month [year month]",
            Mood::ALL.map(|m| m.as_str()).join("|")
        )),
        ["month"] => Ok(month_summary(engine.store(), today.year(), today.month())),
        ["month", year, month] => {
            let (year, month) = parse_year_month(year, month)?;
            Ok(month_summary(engine.store(), year, month))
        }
        [mood, rest @ ..] => {
            let mood: Mood = mood.parse()?;
            let date = match rest.first() {
                Some(raw) => parse_date(raw)?,
                None => today,
            };
            if is_future_day(date, today) {
                return Err(Error::FutureDate(date.to_string()));
            }
            let unlocked = tracking::track_mood_log(engine, date, mood)?;
            Ok(format!(
                "{} Stimmung für {date}: {}{}",
                mood.emoji(),
                mood.label(),
                unlocked_suffix(&unlocked)
            ))
        }
    }
}

pub(crate) fn parse_year_month(year: &str, month: &str) -> Result<(i32, u32)> {
    let invalid = || Error::InvalidDate(format!("{year} {month}"));
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

fn month_summary<S: KeyValueStore>(store: &S, year: i32, month: u32) -> String {
    let summary = MoodJournal::load(store).monthly_summary(year, month);
    if summary.tracked_days == 0 {
        return format!("Keine Einträge für {month:02}/{year}.");
    }
    let mut out = format!("Stimmung {month:02}/{year}: {} Tage erfasst", summary.tracked_days);
    for (mood, count) in summary.counts.iter().filter(|(_, c)| *c > 0) {
        out.push_str(&format!("\n{} {}: {count}", mood.emoji(), mood.label()));
    }
    if let Some(avg) = summary.average_score {
        out.push_str(&format!("\nDurchschnitt: {avg:.1}"));
    }
    out
}
