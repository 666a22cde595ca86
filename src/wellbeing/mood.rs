//! Daily mood entries keyed by calendar day.

use super::calendar::date_key;
use crate::constants::KEY_MOOD_DATA;
use crate::database::store::{KeyValueStore, read_json, write_json};
use crate::error::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Bad,
    Unwell,
    Neutral,
    Good,
    Great,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Bad, Mood::Unwell, Mood::Neutral, Mood::Good, Mood::Great];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Bad => "bad",
            Mood::Unwell => "unwell",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Bad => "schlecht",
            Mood::Unwell => "unwohl",
            Mood::Neutral => "neutral",
            Mood::Good => "gut",
            Mood::Great => "sehr gut",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Bad => "😢",
            Mood::Unwell => "😟",
            Mood::Neutral => "😐",
            Mood::Good => "🙂",
            Mood::Great => "😆",
        }
    }

    /// School-grade style score: 1 is best, 5 is worst.
    pub fn score(&self) -> u8 {
        match self {
            Mood::Great => 1,
            Mood::Good => 2,
            Mood::Neutral => 3,
            Mood::Unwell => 4,
            Mood::Bad => 5,
        }
    }

    /// Colour band the grade planner uses for a grade (1.0 best, 5.0 worst).
    pub fn for_grade(grade: f64) -> Mood {
        if grade <= 1.5 {
            Mood::Great
        } else if grade <= 2.5 {
            Mood::Good
        } else if grade <= 3.5 {
            Mood::Neutral
        } else if grade <= 4.0 {
            Mood::Unwell
        } else {
            Mood::Bad
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bad" | "schlecht" => Ok(Mood::Bad),
            "unwell" | "unwohl" => Ok(Mood::Unwell),
            "neutral" => Ok(Mood::Neutral),
            "good" | "gut" => Ok(Mood::Good),
            "great" | "sehr_gut" | "sehrgut" => Ok(Mood::Great),
            other => Err(Error::UnknownMood(other.to_string())),
        }
    }
}

/// Per-mood counts and average score for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub counts: Vec<(Mood, usize)>,
    pub tracked_days: usize,
    /// Mean of [`Mood::score`] over tracked days; `None` for an empty month.
    pub average_score: Option<f64>,
}

/// Date key (`YYYY-MM-DD`) to the mood recorded for that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodJournal {
    entries: BTreeMap<String, Mood>,
}

impl MoodJournal {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        read_json(store, KEY_MOOD_DATA)
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        write_json(store, KEY_MOOD_DATA, self);
    }

    /// Record (or replace) the mood of `date`. Returns true if the day had no entry before.
    pub fn record(&mut self, date: NaiveDate, mood: Mood) -> bool {
        self.entries.insert(date_key(date), mood).is_none()
    }

    pub fn get(&self, date: NaiveDate) -> Option<Mood> {
        self.entries.get(&date_key(date)).copied()
    }

    /// Number of distinct days with an entry.
    pub fn tracked_days(&self) -> usize {
        self.entries.len()
    }

    pub fn monthly_summary(&self, year: i32, month: u32) -> MonthlySummary {
        let prefix = format!("{year:04}-{month:02}-");
        let moods: Vec<Mood> = self
            .entries
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, m)| *m)
            .collect();
        let counts = Mood::ALL
            .iter()
            .map(|m| (*m, moods.iter().filter(|x| *x == m).count()))
            .collect();
        let average_score = if moods.is_empty() {
            None
        } else {
            let total: u32 = moods.iter().map(|m| u32::from(m.score())).sum();
            Some(f64::from(total) / moods.len() as f64)
        };
        MonthlySummary {
            counts,
            tracked_days: moods.len(),
            average_score,
        }
    }

    /// True while today has no entry; drives the daily mood prompt.
    pub fn needs_entry(&self, today: NaiveDate) -> bool {
        self.get(today).is_none()
    }
}
