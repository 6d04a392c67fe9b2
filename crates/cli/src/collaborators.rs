//! Terminal implementations of the client's UI seams.

use talentboard_client::{NavigationTarget, Navigator, NotificationLevel, Notifier};

/// Prints notifications to stdout and mirrors them into the log.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Success => tracing::info!(%level, "{message}"),
            NotificationLevel::Warning => tracing::warn!(%level, "{message}"),
            NotificationLevel::Error => tracing::error!(%level, "{message}"),
        }
        println!("[{level}] {message}");
    }
}

/// A terminal cannot follow a route, so the hand-off is printed instead.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, target: NavigationTarget) {
        let context = target.context();
        tracing::info!(path = target.path(), %context, "Redirect requested");
        println!("Continue at {} with {}", target.path(), context);
    }
}
