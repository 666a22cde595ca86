use super::ui;
use crate::badges::BadgeEngine;
use crate::commands::mood::parse_year_month;
use crate::commands::unlocked_suffix;
use crate::database::store::KeyValueStore;
use crate::error::{Error, Result};
use crate::services::tracking;
use crate::wellbeing::calendar::{CalendarEvents, parse_date};
use crate::wellbeing::mood::MoodJournal;
use chrono::{Datelike, NaiveDate};

pub fn run_calendar<S: KeyValueStore>(engine: &BadgeEngine<S>, args: &[&str], today: NaiveDate) -> Result<String> {
    let (year, month) = match args {
        [] => (today.year(), today.month()),
        [year, month] => parse_year_month(year, month)?,
        _ => return Ok("Usage: calendar [year month]".to_string()),
    };
    let events = CalendarEvents::load(engine.store());
    let journal = MoodJournal::load(engine.store());
    let mut marked = events.days_with_entries(year, month);
    for day in 1..=31 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day)
            && journal.get(date).is_some()
            && !marked.contains(&day)
        {
            marked.push(day);
        }
    }
    let mut out = ui::month_view(year, month, &marked).ok_or_else(|| Error::InvalidDate(format!("{year} {month}")))?;
    for day in events.days_with_entries(year, month) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day)
            && let Some(entry) = events.get(date)
            && !entry.event.trim().is_empty()
        {
            out.push_str(&format!("\n{day:>2}. {}", entry.event));
        }
    }
    Ok(out)
}

pub fn run_event<S: KeyValueStore>(engine: &mut BadgeEngine<S>, args: &[&str]) -> Result<String> {
    let [date, text @ ..] = args else {
        return Ok("Usage: event <YYYY-MM-DD> <text...>".to_string());
    };
    let date = parse_date(date)?;
    let text = text.join(" ");
    let mut events = CalendarEvents::load(engine.store());
    let mut entry = events.get(date).cloned().unwrap_or_default();
    entry.event = text.trim().to_string();
    let stored = entry.has_content();
    events.set(date, entry);
    events.save(engine.store_mut());
    if !stored {
        return Ok(format!("Eintrag für {date} entfernt."));
    }
    let unlocked = tracking::track_calendar_event(engine)?;
    Ok(format!("Termin für {date} gespeichert.{}", unlocked_suffix(&unlocked)))
}

