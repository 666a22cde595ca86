//! The central state of a running session: the database pool, the user whose
//! store is loaded, and the badge engine working on that store.

use crate::badges::{BadgeEngine, Catalog};
use crate::config::Config;
use crate::database::init::{DbPool, connect, ensure_schema};
use crate::database::kv;
use crate::database::store::MemoryStore;
use anyhow::Context;
use tracing::info;

pub struct AppState {
    /// The connection pool for the SQLite database.
    pub db: DbPool,
    /// Whose keys are loaded into `engine`.
    pub user_id: String,
    /// The engine, working on an in-memory snapshot of the user's store.
    pub engine: BadgeEngine<MemoryStore>,
}

impl AppState {
    /// Connect, make sure the schema exists and hydrate the user's store.
    pub async fn load(config: &Config) -> anyhow::Result<Self> {
        let catalog = Catalog::builtin().context("badge catalog is misconfigured")?;
        let db = connect(&config.database_url)
            .await
            .with_context(|| format!("could not open {}", config.database_url))?;
        ensure_schema(&db).await.context("could not create the kv_store table")?;
        let store = kv::load_snapshot(&db, &config.user_id).await?;
        info!(target = "app", user = %config.user_id, keys = store.len(), "store loaded");
        Ok(Self {
            db,
            user_id: config.user_id.clone(),
            engine: BadgeEngine::new(store, catalog),
        })
    }

    /// Write everything the engine changed since the last call.
    pub async fn persist(&mut self) -> Result<usize, sqlx::Error> {
        kv::flush(&self.db, &self.user_id, self.engine.store_mut()).await
    }
}
