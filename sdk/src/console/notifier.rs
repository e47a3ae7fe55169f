use crate::cli_command::PRINT_TARGET;
use tracing::{event, Level};

pub const ADDING: &str = "Adding";
pub const ADDED: &str = "Added successfully";
pub const ADDING_FAILED: &str = "Adding failed, please try again!";
pub const CONFIGURING: &str = "Configuring";
pub const CONFIGURED: &str = "Configuration is successful";
pub const CONFIGURATION_FAILED: &str = "Configuration failed, please try again!";
pub const DELETING: &str = "Deleting";
pub const DELETED: &str = "Deleted successfully and will refresh soon";
pub const DELETE_FAILED: &str = "Delete failed, please try again";
pub const ACTIVATING: &str = "Activating";
pub const ACTIVATED: &str = "Activated successfully";
pub const DEACTIVATING: &str = "Deactivating";
pub const DEACTIVATED: &str = "Deactivated successfully";
pub const STATUS_CHANGE_FAILED: &str = "Status change failed, please try again!";
pub const LOADING: &str = "Loading";
pub const LOADING_FAILED: &str = "Loading failed, please try again!";
pub const NOTHING_SELECTED: &str = "Select at least one row first";

/// Sink for the user-facing messages of a screen.
pub trait Notifier: Send + Sync {
    fn show_loading(&self, message: &str);
    fn hide_loading(&self);
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints notifications to the console output target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_loading(&self, message: &str) {
        event!(target: PRINT_TARGET, Level::INFO, "{message}...");
    }

    fn hide_loading(&self) {}

    fn success(&self, message: &str) {
        event!(target: PRINT_TARGET, Level::INFO, "{message}");
    }

    fn warning(&self, message: &str) {
        event!(target: PRINT_TARGET, Level::WARN, "{message}");
    }

    fn error(&self, message: &str) {
        event!(target: PRINT_TARGET, Level::ERROR, "{message}");
    }
}

/// Loading indicator, dismissed when dropped.
pub struct Loading<'a, N: Notifier + ?Sized> {
    notifier: &'a N,
}

impl<'a, N: Notifier + ?Sized> Loading<'a, N> {
    pub fn show(notifier: &'a N, message: &str) -> Self {
        notifier.show_loading(message);
        Self { notifier }
    }
}

impl<N: Notifier + ?Sized> Drop for Loading<'_, N> {
    fn drop(&mut self) {
        self.notifier.hide_loading();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Notification {
        Loading(String),
        Hidden,
        Success(String),
        Warning(String),
        Error(String),
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingNotifier {
        pub(crate) notifications: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub(crate) fn take(&self) -> Vec<Notification> {
            std::mem::take(&mut *self.notifications.lock().unwrap())
        }

        fn push(&self, notification: Notification) {
            self.notifications.lock().unwrap().push(notification);
        }
    }

    impl Notifier for RecordingNotifier {
        fn show_loading(&self, message: &str) {
            self.push(Notification::Loading(message.to_string()));
        }

        fn hide_loading(&self) {
            self.push(Notification::Hidden);
        }

        fn success(&self, message: &str) {
            self.push(Notification::Success(message.to_string()));
        }

        fn warning(&self, message: &str) {
            self.push(Notification::Warning(message.to_string()));
        }

        fn error(&self, message: &str) {
            self.push(Notification::Error(message.to_string()));
        }
    }

    #[test]
    fn loading_should_be_hidden_when_dropped() {
        let notifier = RecordingNotifier::default();
        {
            let _loading = Loading::show(&notifier, DELETING);
        }

        assert_eq!(
            notifier.take(),
            vec![Notification::Loading(DELETING.to_string()), Notification::Hidden]
        );
    }
}
