//! Runtime configuration read from the environment (and `.env`, if present).

use crate::constants::{DEFAULT_DATABASE_URL, DEFAULT_USER_ID};
use anyhow::{Context, bail};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite URL of the durable store.
    pub database_url: String,
    /// Namespace for this user's keys; one database can hold several users.
    pub user_id: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env file is fine; the defaults cover local use.
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if !database_url.starts_with("sqlite:") {
            bail!("DATABASE_URL must be a sqlite: URL, got `{database_url}`");
        }
        let user_id = lookup("WELLBEING_USER")
            .map(|u| u.trim().to_string())
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());
        if user_id.is_empty() {
            bail!("WELLBEING_USER must not be blank");
        }
        Ok(Self {
            database_url,
            user_id,
        })
    }

    pub fn describe(&self) -> String {
        format!("user `{}` @ {}", self.user_id, self.database_url)
    }
}

/// Parse a `RUST_LOG`-style filter, falling back to the crate default.
pub fn log_filter(raw: Option<&str>) -> anyhow::Result<tracing_subscriber::EnvFilter> {
    let directive = raw.unwrap_or("wellbeing_companion=info");
    tracing_subscriber::EnvFilter::try_new(directive).with_context(|| format!("invalid log filter `{directive}`"))
}
