// src/notify.rs
//! User-facing notification sink. Mirrors the frontend's toast shape; a
//! notify call is fire-and-forget and never blocks or fails the pipeline.

use serde::Serialize;
use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. Used by the CLI and as a default sink.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => {
                info!("{}: {}", notification.title, notification.description);
            }
            NotificationVariant::Destructive => {
                warn!("{}: {}", notification.title, notification.description);
            }
        }
    }
}

/// Collects notifications so a request handler can attach them to its
/// response the way the frontend queues toasts.
#[derive(Default)]
pub struct BufferedNotifier {
    buffer: Mutex<Vec<Notification>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything collected so far, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Notification> {
        match self.buffer.lock() {
            Ok(mut buffer) => std::mem::take(&mut *buffer),
            Err(_) => Vec::new(),
        }
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_notifier_collects_and_drains() {
        let notifier = BufferedNotifier::new();
        notifier.notify(Notification::info("Saved", "Your profile was updated"));
        notifier.notify(Notification::error("Failed", "Could not reach the server"));

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].variant, NotificationVariant::Default);
        assert_eq!(drained[1].variant, NotificationVariant::Destructive);
        assert!(notifier.drain().is_empty());
    }
}
