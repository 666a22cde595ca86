//! Month grid layout and per-day calendar entries.

use crate::constants::KEY_CALENDAR_EVENTS;
use crate::database::store::{KeyValueStore, read_json, write_json};
use crate::error::Error;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key for a day: `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(raw.to_string()))
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Cells of a Monday-first month view: leading blanks, then day numbers.
///
/// Returns `None` for an invalid year/month.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<Option<u32>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let total = days_in_month(year, month)?;
    // Sunday-based weekday shifted so Monday is column 0.
    let offset = (first.weekday().num_days_from_sunday() + 6) % 7;
    let mut cells: Vec<Option<u32>> = vec![None; offset as usize];
    cells.extend((1..=total).map(Some));
    Some(cells)
}

/// Whether `day` lies strictly after `today` (future days cannot carry a mood).
pub fn is_future_day(day: NaiveDate, today: NaiveDate) -> bool {
    day > today
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub border_color: Option<String>,
}

impl CalendarEntry {
    pub fn has_content(&self) -> bool {
        !self.event.trim().is_empty()
            || !self.note.trim().is_empty()
            || self.border_color.as_deref().is_some_and(|c| c != "none")
    }
}

/// Date key to the entry stored for that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarEvents {
    entries: BTreeMap<String, CalendarEntry>,
}

impl CalendarEvents {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        read_json(store, KEY_CALENDAR_EVENTS)
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        write_json(store, KEY_CALENDAR_EVENTS, self);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&CalendarEntry> {
        self.entries.get(&date_key(date))
    }

    /// Store `entry` for `date`; an entry without content removes the day instead.
    pub fn set(&mut self, date: NaiveDate, entry: CalendarEntry) {
        let key = date_key(date);
        if entry.has_content() {
            self.entries.insert(key, entry);
        } else {
            self.entries.remove(&key);
        }
    }

    /// Days of the given month that carry an entry, ascending.
    pub fn days_with_entries(&self, year: i32, month: u32) -> Vec<u32> {
        self.entries
            .keys()
            .filter_map(|k| parse_date(k).ok())
            .filter(|d| d.year() == year && d.month() == month)
            .map(|d| d.day())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
