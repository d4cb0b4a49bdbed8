//! Notification collaborator
//!
//! Fire-and-forget user notifications (the snackbar of the admin UI).

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }
}

/// Receives user-facing messages
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

/// Notifier that prints to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        // nothing to do if stderr is gone
        let _ = writeln!(std::io::stderr(), "[{}] {}", severity.as_str(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(Severity::Error.as_str(), "error");
    }

    #[test]
    fn test_shared_notifier_forwards() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .withf(|message, severity| message == "boom" && *severity == Severity::Error)
            .times(1)
            .return_const(());

        let shared = Arc::new(mock);
        shared.notify("boom", Severity::Error);
    }
}
