// Central constants: storage keys, leveling curve and tracker thresholds.

// Badge engine ledgers
pub const KEY_UNLOCKED_BADGES: &str = "unlockedBadges";
pub const KEY_BADGE_PROGRESS: &str = "badgeProgress";
pub const KEY_USER_EXP: &str = "userExp";
pub const KEY_PENDING_NOTIFICATIONS: &str = "pendingBadgeNotifications";

// Raw tracker counters
pub const KEY_LOGIN_STREAK: &str = "loginStreak";
pub const KEY_LAST_LOGIN_DATE: &str = "lastLoginDate";
pub const KEY_HAS_VISITED: &str = "hasVisitedProfile";
pub const KEY_MOOD_DATA: &str = "moodData";
pub const KEY_FORUM_POST_COUNT: &str = "forumPostCount";
pub const KEY_READ_ARTICLES: &str = "readArticles";
pub const KEY_HUGO_EXERCISE_COUNT: &str = "hugoExerciseCount";
pub const KEY_HUGO_CATEGORIES: &str = "hugoCategories";

// Feature payloads
pub const KEY_GRADES: &str = "grades";
pub const KEY_CALENDAR_EVENTS: &str = "calendarEvents";

// Leveling curve: level 2 costs BASE, every following span grows by 1.5x (floored).
pub const LEVEL_BASE_EXP: u64 = 100;

// Logins strictly before this local hour unlock the early bird badge.
pub const EARLY_BIRD_HOUR: u32 = 7;

// Live notification channel depth; older unread entries are dropped by the channel.
pub const NOTIFICATION_CHANNEL_CAPACITY: usize = 32;

// Semester label used when a grade is entered without one.
pub const DEFAULT_SEMESTER: &str = "Aktuell";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://wellbeing.db";
pub const DEFAULT_USER_ID: &str = "local";
