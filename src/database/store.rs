//! The key-value contract every ledger and tracker reads and writes.
//!
//! The engine only ever talks to [`KeyValueStore`]; persistence backends adapt
//! to it at the boundary (see [`super::kv`] for the SQLite snapshot adapter).

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// A synchronous, string-keyed, string-valued durable map.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store that remembers which keys changed since the last flush.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    changed: HashSet<String>,
}

/// A pending write produced by [`MemoryStore::pending_changes`]. `None` means the key was removed.
pub type Change = (String, Option<String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-persisted entries; nothing is marked as changed.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            changed: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// The current value (or removal) of every key touched since the last
    /// [`MemoryStore::mark_flushed`], sorted by key. The change set is left as is.
    pub fn pending_changes(&self) -> Vec<Change> {
        let mut keys: Vec<&String> = self.changed.iter().collect();
        keys.sort();
        keys.into_iter()
            .map(|k| (k.clone(), self.entries.get(k).cloned()))
            .collect()
    }

    /// Forget the given changes once they are durably written.
    pub fn mark_flushed(&mut self, changes: &[Change]) {
        for (key, _) in changes {
            self.changed.remove(key);
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.changed.insert(key.to_string());
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.changed.insert(key.to_string());
        }
    }
}

/// Read a JSON payload, substituting `T::default()` for a missing or malformed value.
pub fn read_json<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(target = "store.parse", key, error = %e, "malformed payload; using empty value");
            T::default()
        }
    }
}

pub fn write_json<T, S>(store: &mut S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, raw),
        // Plain maps/vecs of strings and numbers cannot fail to serialize.
        Err(e) => warn!(target = "store.encode", key, error = %e, "failed to encode payload"),
    }
}

/// Read a decimal-string counter; missing or malformed counts as zero.
pub fn read_count<S>(store: &S, key: &str) -> u32
where
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(v) => v,
        Err(e) => {
            warn!(target = "store.parse", key, raw = %raw, error = %e, "malformed counter; using 0");
            0
        }
    }
}

pub fn write_count<S>(store: &mut S, key: &str, value: u32)
where
    S: KeyValueStore + ?Sized,
{
    store.set(key, value.to_string());
}

/// A key counts as filled when it holds anything other than whitespace.
pub fn is_filled<S>(store: &S, key: &str) -> bool
where
    S: KeyValueStore + ?Sized,
{
    store.get(key).is_some_and(|v| !v.trim().is_empty())
}
