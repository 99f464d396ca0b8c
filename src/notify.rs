//! Notification sink contract between the orchestrator and the host.

use tracing::{error, info};

/// Severity attached to a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Host-level sink for transient status messages.
///
/// Fire-and-forget: the orchestrator never inspects the outcome and emits
/// messages in call order. A GUI host would back this with a snackbar.
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink that forwards notifications to the tracing subscriber, used by the
/// CLI host in place of a visual toast.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => info!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}
