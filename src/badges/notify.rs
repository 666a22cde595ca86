//! Tells the presentation layer that a badge was unlocked.
//!
//! A live subscriber receives the notification immediately through a broadcast
//! channel. With nobody listening, the notification is appended to a durable
//! FIFO queue that the next view drains with [`NotificationRelay::consume`].

use super::catalog::BadgeDefinition;
use crate::constants::{KEY_PENDING_NOTIFICATIONS, NOTIFICATION_CHANNEL_CAPACITY};
use crate::database::store::{KeyValueStore, read_json, write_json};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeNotification {
    pub badge_id: String,
    pub badge_name: String,
    pub exp_reward: u32,
}

impl From<&BadgeDefinition> for BadgeNotification {
    fn from(badge: &BadgeDefinition) -> Self {
        Self {
            badge_id: badge.id.to_string(),
            badge_name: badge.name.to_string(),
            exp_reward: badge.exp_reward,
        }
    }
}

/// How a published notification reached (or will reach) the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Live,
    Queued,
}

#[derive(Debug, Clone)]
pub struct NotificationRelay {
    sender: broadcast::Sender<BadgeNotification>,
}

impl Default for NotificationRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationRelay {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Attach a live listener. Dropping the receiver detaches it.
    pub fn subscribe(&self) -> broadcast::Receiver<BadgeNotification> {
        self.sender.subscribe()
    }

    pub fn publish<S>(&self, store: &mut S, badge: &BadgeDefinition) -> Delivery
    where
        S: KeyValueStore + ?Sized,
    {
        let notification = BadgeNotification::from(badge);
        match self.sender.send(notification) {
            Ok(listeners) => {
                debug!(target = "badges.notify", badge = badge.id, listeners, "delivered live");
                Delivery::Live
            }
            Err(broadcast::error::SendError(notification)) => {
                let mut queue: VecDeque<BadgeNotification> =
                    read_json(store, KEY_PENDING_NOTIFICATIONS);
                queue.push_back(notification);
                write_json(store, KEY_PENDING_NOTIFICATIONS, &queue);
                debug!(target = "badges.notify", badge = badge.id, queued = queue.len(), "queued");
                Delivery::Queued
            }
        }
    }

    /// Pop the oldest queued notification. Each entry is returned exactly once.
    pub fn consume<S>(store: &mut S) -> Option<BadgeNotification>
    where
        S: KeyValueStore + ?Sized,
    {
        let mut queue: VecDeque<BadgeNotification> = read_json(store, KEY_PENDING_NOTIFICATIONS);
        let next = queue.pop_front()?;
        if queue.is_empty() {
            store.remove(KEY_PENDING_NOTIFICATIONS);
        } else {
            write_json(store, KEY_PENDING_NOTIFICATIONS, &queue);
        }
        Some(next)
    }

    pub fn pending<S>(store: &S) -> Vec<BadgeNotification>
    where
        S: KeyValueStore + ?Sized,
    {
        read_json(store, KEY_PENDING_NOTIFICATIONS)
    }
}
