//! App-level notification queue.
//!
//! Any component can push a notification; the globally mounted
//! `NotificationContainer` renders and dismisses them.

use dioxus::prelude::*;

/// Most notifications shown at once; older ones are dropped first.
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "notification-info",
            NotificationLevel::Success => "notification-success",
            NotificationLevel::Warning => "notification-warning",
            NotificationLevel::Error => "notification-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, level: NotificationLevel, title: String, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            level,
            title,
            message,
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a notification; returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Global notification state shared via context
#[derive(Clone, Copy)]
pub struct NotificationContext {
    queue: Signal<NotificationQueue>,
}

impl NotificationContext {
    pub fn push(&self, level: NotificationLevel, title: impl Into<String>, message: impl Into<String>) -> u64 {
        let mut queue = self.queue;
        let id = queue.write().push(level, title.into(), message.into());
        id
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Error, title, message)
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Success, title, message)
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.read().items().to_vec()
    }
}

/// Initialize notification context provider - call once at app root
pub fn use_notification_provider() {
    let queue = use_signal(NotificationQueue::default);
    use_context_provider(|| NotificationContext { queue });
}

/// Get notification context - use in any component
pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>()
}
