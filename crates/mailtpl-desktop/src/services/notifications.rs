//! Toast notifications

use std::time::Duration;

use dioxus::prelude::*;
use mailtpl_core::{Notification, NotificationCategory, NotificationSink};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// The toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub notification: Notification,
}

impl ActiveToast {
    /// The toast that follows the one numbered `last_id`
    fn after(last_id: u64, notification: Notification) -> Self {
        Self {
            id: last_id.wrapping_add(1),
            notification,
        }
    }
}

/// Whether a dismissal for `id` applies to the toast on screen
fn is_current(shown: Option<&ActiveToast>, id: u64) -> bool {
    shown.is_some_and(|active| active.id == id)
}

/// Shows notifications as a single transient toast.
///
/// A newer notification replaces the current one; each toast dismisses itself
/// after [`TOAST_DURATION`] unless it was already replaced.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toast: Signal<Option<ActiveToast>>,
    next_id: Signal<u64>,
}

impl ToastNotifier {
    pub const fn new(toast: Signal<Option<ActiveToast>>, next_id: Signal<u64>) -> Self {
        Self { toast, next_id }
    }

    /// Toast signal for rendering
    pub const fn toast(&self) -> Signal<Option<ActiveToast>> {
        self.toast
    }

    /// Remove the toast with the given id if it is still shown
    pub fn dismiss(&self, id: u64) {
        let mut toast = self.toast;
        let current = is_current(toast.peek().as_ref(), id);
        if current {
            toast.set(None);
        }
    }
}

impl NotificationSink for ToastNotifier {
    fn notify(&self, notification: Notification) {
        match notification.category {
            NotificationCategory::Success => tracing::debug!("Toast: {}", notification.message),
            NotificationCategory::Error => tracing::warn!("Toast: {}", notification.message),
        }

        let mut next_id = self.next_id;
        let active = ActiveToast::after(*next_id.peek(), notification);
        let id = active.id;
        next_id.set(id);

        let mut toast = self.toast;
        toast.set(Some(active));

        let notifier = *self;
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            notifier.dismiss(id);
        });
    }
}
