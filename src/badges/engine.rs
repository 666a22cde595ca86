//! The rules engine: unlock ledger, progress ledger and EXP accumulator.

use super::catalog::{BadgeDefinition, Catalog, Counter};
use super::leveling::{LevelDescriptor, level_of};
use super::notify::{BadgeNotification, Delivery, NotificationRelay};
use crate::constants::{KEY_BADGE_PROGRESS, KEY_UNLOCKED_BADGES, KEY_USER_EXP};
use crate::database::store::{KeyValueStore, read_count, read_json, write_count, write_json};
use crate::error::Result;
use std::collections::BTreeMap;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

type UnlockLedger = BTreeMap<String, bool>;
type ProgressLedger = BTreeMap<String, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The badge went from locked to unlocked and its EXP was granted.
    Unlocked,
    /// Nothing changed.
    AlreadyUnlocked,
}

impl UnlockOutcome {
    pub fn is_new(&self) -> bool {
        matches!(self, UnlockOutcome::Unlocked)
    }
}

/// A badge joined with the user's state for it.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStatus {
    pub badge: &'static BadgeDefinition,
    pub unlocked: bool,
    pub progress: u32,
}

pub struct BadgeEngine<S> {
    store: S,
    catalog: Catalog,
    relay: NotificationRelay,
}

impl<S: KeyValueStore> BadgeEngine<S> {
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self::with_relay(store, catalog, NotificationRelay::new())
    }

    pub fn with_relay(store: S, catalog: Catalog, relay: NotificationRelay) -> Self {
        Self {
            store,
            catalog,
            relay,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Mark a badge unlocked and grant its EXP, without notifying anyone.
    ///
    /// The id is checked against the catalog before anything is written.
    #[instrument(level = "debug", skip(self))]
    pub fn unlock(&mut self, badge_id: &str) -> Result<UnlockOutcome> {
        let badge = self.catalog.get(badge_id)?;
        let mut unlocked: UnlockLedger = read_json(&self.store, KEY_UNLOCKED_BADGES);
        if unlocked.get(badge.id).copied().unwrap_or(false) {
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }
        unlocked.insert(badge.id.to_string(), true);
        write_json(&mut self.store, KEY_UNLOCKED_BADGES, &unlocked);

        let exp = read_count(&self.store, KEY_USER_EXP).saturating_add(badge.exp_reward);
        write_count(&mut self.store, KEY_USER_EXP, exp);
        info!(target = "badges.unlock", badge = badge.id, reward = badge.exp_reward, total_exp = exp, "badge unlocked");
        Ok(UnlockOutcome::Unlocked)
    }

    /// Unlock a badge and, if that changed anything, publish a notification for it.
    pub fn award(&mut self, badge_id: &str) -> Result<UnlockOutcome> {
        let outcome = self.unlock(badge_id)?;
        if outcome.is_new() {
            self.publish_notification(badge_id)?;
        }
        Ok(outcome)
    }

    /// Record progress for a badge; reaching its threshold awards it.
    ///
    /// The stored value never decreases. Returns the award outcome when the
    /// threshold was met by `value`, `None` otherwise.
    #[instrument(level = "debug", skip(self))]
    pub fn update_progress(&mut self, badge_id: &str, value: u32) -> Result<Option<UnlockOutcome>> {
        let badge = self.catalog.get(badge_id)?;
        let mut progress: ProgressLedger = read_json(&self.store, KEY_BADGE_PROGRESS);
        let stored = progress.get(badge.id).copied().unwrap_or(0);
        if value > stored || !progress.contains_key(badge.id) {
            progress.insert(badge.id.to_string(), value.max(stored));
            write_json(&mut self.store, KEY_BADGE_PROGRESS, &progress);
        }

        match badge.max_progress {
            Some(max) if value >= max => self.award(badge.id).map(Some),
            _ => Ok(None),
        }
    }

    /// Push a raw counter value into every badge bound to `counter`.
    /// Returns the ids this call newly unlocked.
    pub fn sync_counter(&mut self, counter: Counter, value: u32) -> Result<Vec<&'static str>> {
        let bound: Vec<&'static BadgeDefinition> = self.catalog.bound_to(counter).collect();
        let mut newly = Vec::new();
        for badge in bound {
            let capped = badge.max_progress.map_or(value, |max| value.min(max));
            if let Some(outcome) = self.update_progress(badge.id, capped)?
                && outcome.is_new()
            {
                newly.push(badge.id);
            }
        }
        debug!(target = "badges.progress", counter = counter.as_str(), value, unlocked = newly.len());
        Ok(newly)
    }

    /// Announce an unlocked badge to the presentation layer.
    pub fn publish_notification(&mut self, badge_id: &str) -> Result<Delivery> {
        let badge = self.catalog.get(badge_id)?;
        Ok(self.relay.publish(&mut self.store, badge))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BadgeNotification> {
        self.relay.subscribe()
    }

    pub fn consume_notification(&mut self) -> Option<BadgeNotification> {
        NotificationRelay::consume(&mut self.store)
    }

    pub fn pending_notifications(&self) -> Vec<BadgeNotification> {
        NotificationRelay::pending(&self.store)
    }

    pub fn exp(&self) -> u32 {
        read_count(&self.store, KEY_USER_EXP)
    }

    pub fn level(&self) -> LevelDescriptor {
        level_of(u64::from(self.exp()))
    }

    pub fn is_unlocked(&self, badge_id: &str) -> bool {
        let unlocked: UnlockLedger = read_json(&self.store, KEY_UNLOCKED_BADGES);
        unlocked.get(badge_id).copied().unwrap_or(false)
    }

    pub fn progress(&self, badge_id: &str) -> u32 {
        let progress: ProgressLedger = read_json(&self.store, KEY_BADGE_PROGRESS);
        progress.get(badge_id).copied().unwrap_or(0)
    }

    /// Every catalog badge with the user's unlock flag and progress, in catalog order.
    pub fn badges(&self) -> Vec<BadgeStatus> {
        let unlocked: UnlockLedger = read_json(&self.store, KEY_UNLOCKED_BADGES);
        let progress: ProgressLedger = read_json(&self.store, KEY_BADGE_PROGRESS);
        self.catalog
            .iter()
            .map(|badge| BadgeStatus {
                badge,
                unlocked: unlocked.get(badge.id).copied().unwrap_or(false),
                progress: progress.get(badge.id).copied().unwrap_or(0),
            })
            .collect()
    }

    pub fn unlocked_count(&self) -> usize {
        self.badges().iter().filter(|s| s.unlocked).count()
    }
}
