// Transient notifications raised by remote writes.
//
// Purpose
// - Tell the operator whether a sheet write landed. The widget shows them as toasts.
//
// Responsibilities
// - Queue notifications until the presentation layer drains them, keeping at most
//   `DEFAULT_FEED_LIMIT` (or the configured limit) and dropping the oldest first.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub write_id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(write_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            write_id,
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(write_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            write_id,
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification);
}

/// Most notifications the feed keeps between drains. Older ones are dropped first.
pub const DEFAULT_FEED_LIMIT: usize = 100;

pub struct NotificationFeed {
    pending: Mutex<VecDeque<Notification>>,
    limit: usize,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::with_limit(DEFAULT_FEED_LIMIT)
    }
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            pending: Mutex::new(VecDeque::new()),
            limit: limit.max(1),
        }
    }

    /// Take every pending notification, oldest first.
    pub async fn drain(&self) -> Vec<Notification> {
        self.pending.lock().await.drain(..).collect()
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}

#[async_trait]
impl Notifier for NotificationFeed {
    async fn notify(&self, notification: Notification) {
        tracing::debug!(
            write_id = %notification.write_id,
            level = ?notification.level,
            message = %notification.message,
            "notification queued"
        );
        let mut pending = self.pending.lock().await;
        while pending.len() >= self.limit {
            if let Some(dropped) = pending.pop_front() {
                tracing::warn!(write_id = %dropped.write_id, "notification dropped, feed is full");
            }
        }
        pending.push_back(notification);
    }
}
