//! `post` and `read`: forum activity and article reading.

use super::unlocked_suffix;
use crate::badges::BadgeEngine;
use crate::constants::KEY_FORUM_POST_COUNT;
use crate::database::store::{KeyValueStore, read_count};
use crate::error::Result;
use crate::services::tracking;

pub fn run_post<S: KeyValueStore>(engine: &mut BadgeEngine<S>) -> Result<String> {
    let unlocked = tracking::track_forum_post(engine)?;
    let posts = read_count(engine.store(), KEY_FORUM_POST_COUNT);
    Ok(format!("Beitrag veröffentlicht. Beiträge insgesamt: {posts}{}", unlocked_suffix(&unlocked)))
}

pub fn run_read<S: KeyValueStore>(engine: &mut BadgeEngine<S>, article_id: Option<&str>) -> Result<String> {
    let Some(article_id) = article_id.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok("Usage: read <article-id>".to_string());
    };
    let unlocked = tracking::track_article_read(engine, article_id)?;
    Ok(format!("Artikel `{article_id}` gelesen.{}", unlocked_suffix(&unlocked)))
}
