//! Notification contract for short-lived, user-facing messages.
//!
//! The editor core never renders toasts. It hands a [`Notification`] to
//! whatever [`NotificationSink`] the host installs.

use std::fmt;

use nexusnote_types::BlockKind;
use serde::Serialize;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Error => "error",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NoticeKind,
    pub message: String,
    /// Glyph the host may show next to the message.
    pub icon: &'static str,
}

impl Notification {
    pub fn block_added(kind: BlockKind) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: format!("Added {kind} block"),
            icon: "✨",
        }
    }

    pub fn block_deleted() -> Self {
        Self {
            kind: NoticeKind::Info,
            message: "Block deleted".to_string(),
            icon: "🗑️",
        }
    }

    pub fn blocks_reordered() -> Self {
        Self {
            kind: NoticeKind::Info,
            message: "Block rearranged".to_string(),
            icon: "🔄",
        }
    }

    pub fn last_block_refused() -> Self {
        Self {
            kind: NoticeKind::Error,
            message: "Cannot delete the last block".to_string(),
            icon: "🛑",
        }
    }
}

/// Receiver for notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Default sink: log each notification and drop it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NoticeKind::Error => {
                tracing::warn!(kind = %notification.kind, "{}", notification.message)
            }
            _ => tracing::info!(kind = %notification.kind, "{}", notification.message),
        }
    }
}

/// Sink that keeps every notification, for hosts that batch or tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Notification::block_added(BlockKind::Todo).message, "Added todo block");
        assert_eq!(Notification::block_added(BlockKind::Todo).kind, NoticeKind::Success);
        assert_eq!(Notification::block_deleted().kind, NoticeKind::Info);
        assert_eq!(Notification::blocks_reordered().message, "Block rearranged");
        assert_eq!(Notification::last_block_refused().kind, NoticeKind::Error);
        assert_eq!(Notification::last_block_refused().icon, "🛑");
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        sink.notify(Notification::block_deleted());
        sink.notify(Notification::blocks_reordered());
        assert_eq!(sink.notifications().len(), 2);
        assert_eq!(sink.last(), Some(&Notification::blocks_reordered()));

        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert!(sink.notifications().is_empty());
    }

    #[test]
    fn test_serialized_kind_is_lowercase() {
        let json = serde_json::to_value(Notification::block_deleted()).unwrap();
        assert_eq!(json["kind"], "info");
        assert_eq!(json["message"], "Block deleted");
    }
}
