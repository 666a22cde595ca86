//! Persists one user's key-value store in the `kv_store` table.
//! The engine works on an in-memory snapshot; these functions hydrate it and
//! write back whatever changed.

use super::init::DbPool;
use super::store::MemoryStore;
use tracing::{debug, instrument};

/// Load every entry stored for `user_id` into a fresh [`MemoryStore`].
#[instrument(level = "debug", skip(pool))]
pub async fn load_snapshot(pool: &DbPool, user_id: &str) -> Result<MemoryStore, sqlx::Error> {
    let rows: Vec<(String, String)> =
        sqlx::query_as("SELECT key, value FROM kv_store WHERE user_id = ?1")
            .bind(user_id)
            .fetch_all(pool)
            .await?;
    debug!(target = "db.kv", user_id, entries = rows.len(), "snapshot loaded");
    Ok(MemoryStore::from_entries(rows))
}

/// Write changed keys back in one transaction. Returns the number of keys touched.
///
/// The change set is only cleared after the commit, so a failed flush is
/// retried in full by the next call.
#[instrument(level = "debug", skip(pool, store))]
pub async fn flush(pool: &DbPool, user_id: &str, store: &mut MemoryStore) -> Result<usize, sqlx::Error> {
    if !store.has_changes() {
        return Ok(0);
    }
    let changes = store.pending_changes();
    let mut tx = pool.begin().await?;
    for (key, value) in &changes {
        match value {
            Some(value) => {
                sqlx::query(
                    "INSERT INTO kv_store (user_id, key, value) VALUES (?1, ?2, ?3) \
                     ON CONFLICT (user_id, key) DO UPDATE SET value = excluded.value",
                )
                .bind(user_id)
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                sqlx::query("DELETE FROM kv_store WHERE user_id = ?1 AND key = ?2")
                    .bind(user_id)
                    .bind(key)
                    .execute(&mut *tx)
                    .await?;
            }
        }
    }
    tx.commit().await?;
    store.mark_flushed(&changes);
    debug!(target = "db.kv", user_id, keys = changes.len(), "flushed");
    Ok(changes.len())
}

/// Read a single persisted value without loading the whole snapshot.
pub async fn get_value(pool: &DbPool, user_id: &str, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT value FROM kv_store WHERE user_id = ?1 AND key = ?2")
        .bind(user_id)
        .bind(key)
        .fetch_optional(pool)
        .await
}
