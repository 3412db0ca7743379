//! Notification service implementation
//!
//! Transient, dismissible messages reporting operation outcomes. New
//! notifications stack on top of older ones and each expires on its own
//! timer, independent of any later activity. The view is told about every
//! notification shown and every one removed, whether by expiry or dismissal.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;
use crate::view::EventView;

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

impl NotificationKind {
    /// Style class name, e.g. for `alert-success`
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Danger => "danger",
        }
    }
}

/// A single on-screen notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
}

/// Stack of live notifications, newest first
#[derive(Clone)]
pub struct NotificationCenter {
    active: Arc<Mutex<Vec<Notification>>>,
    view: Arc<dyn EventView>,
    ttl: Duration,
}

impl NotificationCenter {
    /// Create a new NotificationCenter whose notifications live for `ttl`
    pub fn new(ttl: Duration, view: Arc<dyn EventView>) -> Self {
        Self {
            active: Arc::new(Mutex::new(Vec::new())),
            view,
            ttl,
        }
    }

    /// Push a notification on top of the stack, show it and schedule its
    /// removal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        };

        self.lock().insert(0, notification.clone());
        self.view.show_notification(&notification);
        debug!(id = %notification.id, kind = kind.as_str(), "Notification shown");

        let center = self.clone();
        let id = notification.id;
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if center.dismiss(id) {
                debug!(id = %id, "Notification expired");
            }
        });

        notification
    }

    /// Remove a notification early. Returns false if it was already gone.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let removed = {
            let mut active = self.lock();
            let before = active.len();
            active.retain(|n| n.id != id);
            active.len() != before
        };

        if removed {
            self.view.dismiss_notification(id);
        }
        removed
    }

    /// Snapshot of live notifications, newest first
    pub fn active(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        // Entries are inserted and removed whole, so a poisoned Vec is still consistent
        self.active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventForm;
    use crate::view::{EventCard, FormMode};

    /// Records which notifications are currently on screen
    #[derive(Default)]
    struct ScreenLog {
        visible: Mutex<Vec<Uuid>>,
    }

    impl ScreenLog {
        fn visible(&self) -> Vec<Uuid> {
            self.visible.lock().unwrap().clone()
        }
    }

    impl EventView for ScreenLog {
        fn render(&self, _cards: &[EventCard]) {}
        fn show_event(&self, _card: &EventCard) {}
        fn fill_form(&self, _form: &EventForm, _mode: FormMode) {}
        fn reset_form(&self) {}

        fn show_notification(&self, notification: &Notification) {
            self.visible.lock().unwrap().push(notification.id);
        }

        fn dismiss_notification(&self, id: Uuid) {
            self.visible.lock().unwrap().retain(|shown| *shown != id);
        }
    }

    fn center() -> (NotificationCenter, Arc<ScreenLog>) {
        let screen = Arc::new(ScreenLog::default());
        let center = NotificationCenter::new(Duration::from_secs(5), screen.clone());
        (center, screen)
    }

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_stack_newest_first() {
        let (center, screen) = center();
        let first = center.notify("first", NotificationKind::Success);
        let second = center.notify("second", NotificationKind::Danger);

        let active = center.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "second");
        assert_eq!(active[0].kind, NotificationKind::Danger);
        assert_eq!(active[1].message, "first");
        assert_eq!(screen.visible(), vec![first.id, second.id]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_notification_expires_on_its_own_timer() {
        let (center, screen) = center();
        center.notify("early", NotificationKind::Success);
        settle().await;

        tokio::time::advance(Duration::from_secs(3)).await;
        let late = center.notify("late", NotificationKind::Success);
        settle().await;

        tokio::time::advance(Duration::from_millis(2100)).await;
        settle().await;
        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "late");
        assert_eq!(screen.visible(), vec![late.id]);

        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assert!(center.active().is_empty());
        assert!(screen.visible().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_early() {
        let (center, screen) = center();
        let kept = center.notify("stay", NotificationKind::Success);
        let shown = center.notify("bye", NotificationKind::Success);

        assert!(center.dismiss(shown.id));
        assert!(!center.dismiss(shown.id));
        assert_eq!(center.active().len(), 1);
        assert_eq!(screen.visible(), vec![kept.id]);

        tokio::time::advance(Duration::from_secs(6)).await;
        settle().await;
        assert!(center.active().is_empty());
        assert!(screen.visible().is_empty());
    }
}
