//! User-facing notifications raised by the editor

use serde::{Deserialize, Serialize};

/// Message shown after a successful save
pub const UPDATE_SUCCESS_MESSAGE: &str = "Successfully updated settings";
/// Message shown after a failed save
pub const UPDATE_FAILURE_MESSAGE: &str = "Failed to update settings";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Success,
    Error,
}

/// A transient, fire-and-forget message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub category: NotificationCategory,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: NotificationCategory::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: NotificationCategory::Error,
            message: message.into(),
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.category, NotificationCategory::Error)
    }
}

/// Destination for notifications (toast area, terminal, test recorder)
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<F: Fn(Notification)> NotificationSink for F {
    fn notify(&self, notification: Notification) {
        self(notification);
    }
}
