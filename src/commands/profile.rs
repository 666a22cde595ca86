//! `profile`: show the profile or set one field.

use super::unlocked_suffix;
use crate::badges::BadgeEngine;
use crate::database::store::KeyValueStore;
use crate::error::Result;
use crate::services::tracking;
use crate::ui::style::{EMOJI_CHECK, stat_pair};
use crate::wellbeing::profile::{self, ProfileField};

const ALL_FIELDS: [ProfileField; 7] = [
    ProfileField::Username,
    ProfileField::Institution,
    ProfileField::FieldOfStudy,
    ProfileField::Interests,
    ProfileField::Happiness,
    ProfileField::ProfileImage,
    ProfileField::Bio,
];

pub fn run<S: KeyValueStore>(engine: &mut BadgeEngine<S>, args: &[&str]) -> Result<String> {
    match args {
        [] => Ok(show(engine.store())),
        ["set", field, value @ ..] => {
            let field: ProfileField = field.parse()?;
            profile::set_field(engine.store_mut(), field, &value.join(" "));
            let unlocked = tracking::track_profile_complete(engine)?;
            Ok(format!("{} gespeichert.{}", field.label(), unlocked_suffix(&unlocked)))
        }
        _ => Ok("Usage: profile | profile set <field> <value...>".to_string()),
    }
}

fn show<S: KeyValueStore>(store: &S) -> String {
    let missing = profile::missing_fields(store);
    let filled = ProfileField::REQUIRED.len() - missing.len();
    let mut out = format!("Profil: {} Pflichtfelder ausgefüllt", stat_pair(filled, ProfileField::REQUIRED.len()));
    if missing.is_empty() {
        out.push_str(&format!(" {EMOJI_CHECK}"));
    }
    for field in ALL_FIELDS {
        let value = profile::get_field(store, field).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("\n{}: {value}", field.label()));
    }
    out
}
