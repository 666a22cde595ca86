use super::ui;
use crate::badges::BadgeEngine;
use crate::database::store::KeyValueStore;

pub fn run_badges<S: KeyValueStore>(engine: &BadgeEngine<S>) -> String {
    ui::badge_overview(engine.exp(), &engine.level(), &engine.badges())
}

pub fn run_level<S: KeyValueStore>(engine: &BadgeEngine<S>) -> String {
    ui::level_card(engine.exp(), &engine.level())
}

/// Drain every queued notification, oldest first.
pub fn drain_toasts<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> Vec<String> {
    let mut toasts = Vec::new();
    while let Some(n) = engine.consume_notification() {
        toasts.push(ui::toast(&n));
    }
    toasts
}

pub fn run_notifications<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> String {
    let toasts = drain_toasts(engine);
    if toasts.is_empty() {
        "No new notifications.".to_string()
    } else {
        toasts.join("\n")
    }
}
