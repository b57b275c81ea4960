//! SMS notifier and factory

use std::sync::Arc;

use crate::application::ports::{NotificationError, NotificationFactory, Notifier, SharedSink};
use crate::domain::NotificationKind;
use crate::infrastructure::sink::stdout_sink;

use super::format_sent_line;

/// SMS notifier adapter
///
/// The phone number is not validated.
pub struct SmsNotifier {
    phone_number: String,
    sink: SharedSink,
}

impl SmsNotifier {
    /// Create a notifier that writes to standard output
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::with_sink(phone_number, stdout_sink())
    }

    /// Create with a custom sink
    pub fn with_sink(phone_number: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            phone_number: phone_number.into(),
            sink,
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

impl Notifier for SmsNotifier {
    fn send(&self, message: &str) -> Result<(), NotificationError> {
        self.sink
            .emit(&format_sent_line(NotificationKind::Sms, &self.phone_number, message));
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.phone_number
    }
}

/// Produces an [`SmsNotifier`] for a fixed phone number
pub struct SmsFactory {
    phone_number: String,
    sink: SharedSink,
}

impl SmsFactory {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::with_sink(phone_number, stdout_sink())
    }

    /// Create with a sink handed on to every produced notifier
    pub fn with_sink(phone_number: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            phone_number: phone_number.into(),
            sink,
        }
    }
}

impl NotificationFactory for SmsFactory {
    fn create_notifier(&self) -> Box<dyn Notifier> {
        Box::new(SmsNotifier::with_sink(
            self.phone_number.clone(),
            Arc::clone(&self.sink),
        ))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sink::MemorySink;

    #[test]
    fn send_emits_phone_number_and_message() {
        let sink = MemorySink::new();
        let notifier = SmsNotifier::with_sink("+1234567890", Arc::new(sink.clone()));

        notifier.send("Hello via SMS!").unwrap();

        assert_eq!(
            sink.lines(),
            vec!["Sending SMS with message: +1234567890, Hello via SMS!".to_string()]
        );
    }

    #[test]
    fn factory_produces_a_new_notifier_each_call() {
        let sink = MemorySink::new();
        let factory = SmsFactory::with_sink("+1987654321", Arc::new(sink.clone()));

        let first = factory.create_notifier();
        let second = factory.create_notifier();
        first.send("one").unwrap();
        second.send("two").unwrap();

        assert_eq!(first.destination(), "+1987654321");
        assert_eq!(second.destination(), "+1987654321");
        assert_eq!(sink.len(), 2);
    }
}
