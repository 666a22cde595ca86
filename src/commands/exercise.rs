//! `exercise`: a finished coping exercise with Hugo.

use super::unlocked_suffix;
use crate::badges::BadgeEngine;
use crate::constants::{KEY_HUGO_CATEGORIES, KEY_HUGO_EXERCISE_COUNT};
use crate::database::store::{KeyValueStore, read_count, read_json};
use crate::error::Result;
use crate::services::tracking;
use crate::wellbeing::coping::CopingCategory;

pub fn run<S: KeyValueStore>(engine: &mut BadgeEngine<S>, category: Option<&str>) -> Result<String> {
    let category = category.map(str::parse::<CopingCategory>).transpose()?;
    let unlocked = tracking::track_coping_exercise(engine, category.map(|c| c.id()))?;
    let total = read_count(engine.store(), KEY_HUGO_EXERCISE_COUNT);
    let label = category.map(|c| format!(" ({})", c.label())).unwrap_or_default();
    let mut out = format!(
        "Übung abgeschlossen{label}. Übungen insgesamt: {total}{}",
        unlocked_suffix(&unlocked)
    );
    let tried: Vec<String> = read_json(engine.store(), KEY_HUGO_CATEGORIES);
    let open: Vec<&str> = CopingCategory::ALL
        .iter()
        .filter(|c| !tried.iter().any(|t| t == c.id()))
        .map(|c| c.label())
        .collect();
    if !open.is_empty() {
        out.push_str(&format!("\nNoch nicht ausprobiert: {}", open.join(", ")));
    }
    Ok(out)
}
