//! In-memory notifications ("toasts").
//!
//! Every user action in the dashboard is acknowledged with a simulated
//! notification; nothing is actually sent anywhere. The center keeps a short
//! queue of toasts that expire after a time-to-live.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    /// Short glyph shown in front of the toast title.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single acknowledgement shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Local>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            created_at: Local::now(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, description)
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    age: Duration,
}

/// Queue of live toasts with expiry.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    ttl: Duration,
    max_visible: usize,
    toasts: VecDeque<Toast>,
    total: usize,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(4), 3)
    }
}

impl NotificationCenter {
    #[must_use]
    pub fn new(ttl: Duration, max_visible: usize) -> Self {
        Self {
            ttl,
            max_visible: max_visible.max(1),
            toasts: VecDeque::new(),
            total: 0,
        }
    }

    /// Raise a notification and return it.
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> &Notification {
        self.push(Notification::new(kind, title, description))
    }

    /// Queue an already-built notification.
    pub fn push(&mut self, notification: Notification) -> &Notification {
        tracing::info!(
            kind = %notification.kind,
            title = %notification.title,
            description = %notification.description,
            "notification"
        );
        self.total += 1;
        self.toasts.push_front(Toast {
            notification,
            age: Duration::ZERO,
        });
        self.toasts.truncate(self.max_visible);
        &self.toasts[0].notification
    }

    /// Age every toast by `dt` and drop the expired ones.
    pub fn advance(&mut self, dt: Duration) {
        for toast in &mut self.toasts {
            toast.age += dt;
        }
        let ttl = self.ttl;
        self.toasts.retain(|t| t.age < ttl);
    }

    /// Live toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|t| &t.notification)
    }

    /// Most recent live toast.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.front().map(|t| &t.notification)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Notifications raised since creation, including expired ones.
    #[must_use]
    pub const fn total_sent(&self) -> usize {
        self.total
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_newest_first() {
        let mut center = NotificationCenter::default();
        center.notify(NotificationKind::Success, "first", "");
        center.notify(NotificationKind::Info, "second", "");
        let titles: Vec<&str> = center.visible().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
        assert_eq!(center.latest().map(|n| n.kind), Some(NotificationKind::Info));
    }

    #[test]
    fn test_max_visible_caps_queue() {
        let mut center = NotificationCenter::new(Duration::from_secs(4), 2);
        for i in 0..5 {
            center.notify(NotificationKind::Info, format!("n{i}"), "");
        }
        assert_eq!(center.len(), 2);
        assert_eq!(center.total_sent(), 5);
    }

    #[test]
    fn test_toasts_expire_after_ttl() {
        let mut center = NotificationCenter::new(Duration::from_millis(100), 3);
        center.notify(NotificationKind::Success, "saved", "");
        center.advance(Duration::from_millis(60));
        center.notify(NotificationKind::Success, "later", "");
        center.advance(Duration::from_millis(40));

        let titles: Vec<&str> = center.visible().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["later"]);

        center.advance(Duration::from_millis(60));
        assert!(center.is_empty());
    }

    #[test]
    fn test_dismiss_all() {
        let mut center = NotificationCenter::default();
        center.notify(NotificationKind::Warning, "careful", "");
        center.dismiss_all();
        assert!(center.latest().is_none());
    }
}
