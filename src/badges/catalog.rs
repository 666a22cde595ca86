//! Defines every badge, its reward and the counter that drives it.

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Raw tracker counters a progress badge can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    LoginStreak,
    MoodDays,
    ForumPosts,
    ArticlesRead,
    CopingExercises,
    CopingCategories,
}

impl Counter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Counter::LoginStreak => "login_streak",
            Counter::MoodDays => "mood_days",
            Counter::ForumPosts => "forum_posts",
            Counter::ArticlesRead => "articles_read",
            Counter::CopingExercises => "coping_exercises",
            Counter::CopingCategories => "coping_categories",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub exp_reward: u32,
    /// Present on progress badges: reaching this value unlocks the badge.
    pub max_progress: Option<u32>,
    /// The counter feeding this badge's progress, if any.
    pub counter: Option<Counter>,
}

impl BadgeDefinition {
    pub fn is_progress_badge(&self) -> bool {
        self.max_progress.is_some()
    }
}

// Badge ids referenced by the trackers.
pub const FIRST_LOGIN: &str = "first_login";
pub const WEEK_STREAK: &str = "week_streak";
pub const MONTH_STREAK: &str = "month_streak";
pub const FIRST_FORUM_POST: &str = "first_forum_post";
pub const FORUM_REGULAR: &str = "forum_regular";
pub const MOOD_TRACKER: &str = "mood_tracker";
pub const MOOD_MASTER: &str = "mood_master";
pub const CALENDAR_STARTER: &str = "calendar_starter";
pub const ARTICLE_READER: &str = "article_reader";
pub const PROFILE_COMPLETE: &str = "profile_complete";
pub const GRADE_PLANNER: &str = "grade_planner";
pub const EARLY_BIRD: &str = "early_bird";
pub const FIRST_HUGO_EXERCISE: &str = "first_hugo_exercise";
pub const HUGO_REGULAR: &str = "hugo_regular";
pub const HUGO_MASTER: &str = "hugo_master";
pub const HUGO_ALL_CATEGORIES: &str = "hugo_all_categories";

pub const BADGES: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: FIRST_LOGIN,
        name: "Willkommen!",
        description: "Erster Login in der App",
        exp_reward: 10,
        max_progress: None,
        counter: None,
    },
    BadgeDefinition {
        id: WEEK_STREAK,
        name: "Wochenläufer",
        description: "7 Tage hintereinander eingeloggt",
        exp_reward: 50,
        max_progress: Some(7),
        counter: Some(Counter::LoginStreak),
    },
    BadgeDefinition {
        id: MONTH_STREAK,
        name: "Monatsmeister",
        description: "30 Tage hintereinander eingeloggt",
        exp_reward: 200,
        max_progress: Some(30),
        counter: Some(Counter::LoginStreak),
    },
    BadgeDefinition {
        id: FIRST_FORUM_POST,
        name: "Erste Worte",
        description: "Erster Beitrag im Forum",
        exp_reward: 25,
        max_progress: None,
        counter: None,
    },
    BadgeDefinition {
        id: FORUM_REGULAR,
        name: "Stammgast",
        description: "10 Beiträge im Forum",
        exp_reward: 100,
        max_progress: Some(10),
        counter: Some(Counter::ForumPosts),
    },
    BadgeDefinition {
        id: MOOD_TRACKER,
        name: "Stimmungsforscher",
        description: "7 Tage Stimmung getrackt",
        exp_reward: 50,
        max_progress: Some(7),
        counter: Some(Counter::MoodDays),
    },
    BadgeDefinition {
        id: MOOD_MASTER,
        name: "Emotionsexperte",
        description: "30 Tage Stimmung getrackt",
        exp_reward: 150,
        max_progress: Some(30),
        counter: Some(Counter::MoodDays),
    },
    BadgeDefinition {
        id: CALENDAR_STARTER,
        name: "Terminplaner",
        description: "Ersten Termin eingetragen",
        exp_reward: 15,
        max_progress: None,
        counter: None,
    },
    BadgeDefinition {
        id: ARTICLE_READER,
        name: "Wissensdurstig",
        description: "5 Artikel gelesen",
        exp_reward: 40,
        max_progress: Some(5),
        counter: Some(Counter::ArticlesRead),
    },
    BadgeDefinition {
        id: PROFILE_COMPLETE,
        name: "Profi-Profil",
        description: "Profil vollständig ausgefüllt",
        exp_reward: 30,
        max_progress: None,
        counter: None,
    },
    BadgeDefinition {
        id: GRADE_PLANNER,
        name: "Notenkenner",
        description: "Erste Note eingetragen",
        exp_reward: 20,
        max_progress: None,
        counter: None,
    },
    BadgeDefinition {
        id: EARLY_BIRD,
        name: "Frühaufsteher",
        description: "Vor 7 Uhr eingeloggt",
        exp_reward: 25,
        max_progress: None,
        counter: None,
    },
    // Hugo coping badges
    BadgeDefinition {
        id: FIRST_HUGO_EXERCISE,
        name: "Hugos Freund",
        description: "Erste Übung mit Hugo abgeschlossen",
        exp_reward: 20,
        max_progress: None,
        counter: None,
    },
    BadgeDefinition {
        id: HUGO_REGULAR,
        name: "Achtsamkeits-Profi",
        description: "10 Übungen mit Hugo abgeschlossen",
        exp_reward: 75,
        max_progress: Some(10),
        counter: Some(Counter::CopingExercises),
    },
    BadgeDefinition {
        id: HUGO_MASTER,
        name: "Coping-Meister",
        description: "25 Übungen mit Hugo abgeschlossen",
        exp_reward: 150,
        max_progress: Some(25),
        counter: Some(Counter::CopingExercises),
    },
    BadgeDefinition {
        id: HUGO_ALL_CATEGORIES,
        name: "Ganzheitlich",
        description: "Übungen in allen 4 Kategorien gemacht",
        exp_reward: 50,
        max_progress: Some(4),
        counter: Some(Counter::CopingCategories),
    },
];

/// A validated, read-only view over a badge table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    badges: &'static [BadgeDefinition],
}

impl Catalog {
    /// Validate `badges` and wrap them. Any violation is a configuration error.
    pub fn new(badges: &'static [BadgeDefinition]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(badges.len());
        for badge in badges {
            if !seen.insert(badge.id) {
                return Err(Error::DuplicateBadge(badge.id));
            }
            if badge.exp_reward == 0 {
                return Err(Error::InvalidBadge {
                    id: badge.id,
                    reason: "exp reward must be positive",
                });
            }
            if badge.max_progress == Some(0) {
                return Err(Error::InvalidBadge {
                    id: badge.id,
                    reason: "max progress must be positive",
                });
            }
            if badge.counter.is_some() && !badge.is_progress_badge() {
                return Err(Error::InvalidBadge {
                    id: badge.id,
                    reason: "only progress badges can be bound to a counter",
                });
            }
        }
        Ok(Self { badges })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::new(BADGES)
    }

    pub fn find(&self, id: &str) -> Option<&'static BadgeDefinition> {
        self.badges.iter().find(|b| b.id == id)
    }

    /// Like [`Catalog::find`] but reports an unknown id as an error.
    pub fn get(&self, id: &str) -> Result<&'static BadgeDefinition> {
        self.find(id).ok_or_else(|| Error::UnknownBadge(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static BadgeDefinition> {
        self.badges.iter()
    }

    /// Progress badges fed by `counter`, in catalog order.
    pub fn bound_to(&self, counter: Counter) -> impl Iterator<Item = &'static BadgeDefinition> {
        self.badges.iter().filter(move |b| b.counter == Some(counter))
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
