//! Email notifier and factory

use std::sync::Arc;

use crate::application::ports::{NotificationError, NotificationFactory, Notifier, SharedSink};
use crate::domain::NotificationKind;
use crate::infrastructure::sink::stdout_sink;

use super::format_sent_line;

/// Email notifier adapter
pub struct EmailNotifier {
    recipient: String,
    sink: SharedSink,
}

impl EmailNotifier {
    /// Create a notifier that writes to standard output
    pub fn new(recipient: impl Into<String>) -> Self {
        Self::with_sink(recipient, stdout_sink())
    }

    /// Create with a custom sink
    pub fn with_sink(recipient: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            recipient: recipient.into(),
            sink,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) -> Result<(), NotificationError> {
        self.sink
            .emit(&format_sent_line(NotificationKind::Email, &self.recipient, message));
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.recipient
    }
}

/// Produces an [`EmailNotifier`] for a fixed recipient
pub struct EmailFactory {
    recipient: String,
    sink: SharedSink,
}

impl EmailFactory {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self::with_sink(recipient, stdout_sink())
    }

    /// Create with a sink handed on to every produced notifier
    pub fn with_sink(recipient: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            recipient: recipient.into(),
            sink,
        }
    }
}

impl NotificationFactory for EmailFactory {
    fn create_notifier(&self) -> Box<dyn Notifier> {
        Box::new(EmailNotifier::with_sink(
            self.recipient.clone(),
            Arc::clone(&self.sink),
        ))
    }
}
