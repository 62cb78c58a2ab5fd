use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Visual treatment requested for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient, dismissible toast.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    /// Creates a default-variant notification with a 5-second TTL.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
            created_at: Instant::now(),
            ttl: Duration::from_secs(5),
        }
    }

    /// Creates a destructive notification with a 10-second TTL.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ttl: Duration::from_secs(10),
            ..Self::new(title, description)
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns `true` if this notification has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Receiver of toasts. Fire-and-forget: nothing is reported back.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A bounded queue of notifications that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notification, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Removes and returns every notification still within its TTL,
    /// oldest first. Expired entries are discarded unseen.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.evict_expired();
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(16)
    }
}

/// A [`NotificationQueue`] shared between the controller and the renderer.
#[derive(Debug, Clone, Default)]
pub struct SharedNotificationQueue {
    inner: Arc<Mutex<NotificationQueue>>,
}

impl SharedNotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NotificationQueue::new(capacity))),
        }
    }

    pub fn drain(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut queue) => queue.drain(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for SharedNotificationQueue {
    fn notify(&self, notification: Notification) {
        if let Ok(mut queue) = self.inner.lock() {
            queue.push(notification);
        }
    }
}
