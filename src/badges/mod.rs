//! Badges, EXP and levels: the gamification core every tracker reports into.

pub mod catalog;
pub mod engine;
pub mod leveling;
pub mod notify;

pub use catalog::{BadgeDefinition, Catalog, Counter};
pub use engine::{BadgeEngine, BadgeStatus, UnlockOutcome};
pub use leveling::{LevelDescriptor, level_of};
pub use notify::{BadgeNotification, Delivery, NotificationRelay};
