//! User-facing notifications

use std::collections::VecDeque;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A message waiting to be acknowledged by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Channel through which the form controller reports submission outcomes
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: String);
}

/// FIFO of notifications shown one at a time as a modal dialog
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    /// The notification currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }

    /// Whether a modal notification is blocking input
    pub fn is_active(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Dismiss the notification on screen
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, kind: NotificationKind, message: String) {
        self.pending.push_back(Notification { kind, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_is_inactive() {
        let queue = NotificationQueue::default();
        assert!(!queue.is_active());
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_notifications_are_shown_in_order() {
        let mut queue = NotificationQueue::default();
        queue.notify(NotificationKind::Success, "first".to_string());
        queue.notify(NotificationKind::Error, "second".to_string());
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("first"));
        let dismissed = queue.dismiss().unwrap();
        assert_eq!(dismissed.kind, NotificationKind::Success);
        assert_eq!(queue.current().map(|n| n.kind), Some(NotificationKind::Error));
        queue.dismiss();
        assert!(!queue.is_active());
    }

    #[test]
    fn test_dismiss_on_empty_is_none() {
        let mut queue = NotificationQueue::default();
        assert!(queue.dismiss().is_none());
    }

    #[test]
    fn test_kind_titles() {
        assert_eq!(NotificationKind::Success.title(), "Success");
        assert_eq!(NotificationKind::Error.title(), "Error");
    }
}
