//! Push notifier and factory

use std::sync::Arc;

use crate::application::ports::{NotificationError, NotificationFactory, Notifier, SharedSink};
use crate::domain::NotificationKind;
use crate::infrastructure::sink::stdout_sink;

use super::format_sent_line;

/// Push notifier adapter
pub struct PushNotifier {
    device_id: String,
    sink: SharedSink,
}

impl PushNotifier {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self::with_sink(device_id, stdout_sink())
    }

    pub fn with_sink(device_id: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            device_id: device_id.into(),
            sink,
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }
}

impl Notifier for PushNotifier {
    fn send(&self, message: &str) -> Result<(), NotificationError> {
        self.sink
            .emit(&format_sent_line(NotificationKind::Push, &self.device_id, message));
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.device_id
    }
}

/// Produces a [`PushNotifier`] for a fixed device id
pub struct PushFactory {
    device_id: String,
    sink: SharedSink,
}

impl PushFactory {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self::with_sink(device_id, stdout_sink())
    }

    /// Create with a sink handed on to every produced notifier
    pub fn with_sink(device_id: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            device_id: device_id.into(),
            sink,
        }
    }
}

impl NotificationFactory for PushFactory {
    fn create_notifier(&self) -> Box<dyn Notifier> {
        Box::new(PushNotifier::with_sink(
            self.device_id.clone(),
            Arc::clone(&self.sink),
        ))
    }
}
