//! Toast/notification seam.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        })
    }
}

/// Shows leveled, non-blocking messages to the viewer.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}
