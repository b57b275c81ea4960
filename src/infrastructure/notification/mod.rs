//! Notification infrastructure module
//!
//! Console-backed email, SMS and push notifiers, one factory per notifier,
//! and the kind-keyed factory selector.

mod email;
mod push;
mod selector;
mod sms;

pub use email::{EmailFactory, EmailNotifier};
pub use push::{PushFactory, PushNotifier};
pub use selector::{create_factory, select_factory, select_factory_with_sink, KindFactorySelector};
pub use sms::{SmsFactory, SmsNotifier};

use crate::domain::NotificationKind;

/// Format the line a notifier emits for one sent message
pub fn format_sent_line(kind: NotificationKind, destination: &str, message: &str) -> String {
    format!(
        "Sending {} with message: {}, {}",
        kind.label(),
        destination,
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sent_line_formats() {
        assert_eq!(
            format_sent_line(NotificationKind::Email, "a@example.com", "Hi"),
            "Sending email with message: a@example.com, Hi"
        );
        assert_eq!(
            format_sent_line(NotificationKind::Sms, "+1234567890", "Hi"),
            "Sending SMS with message: +1234567890, Hi"
        );
        assert_eq!(
            format_sent_line(NotificationKind::Push, "device123", "Hi"),
            "Sending push notification with message: device123, Hi"
        );
    }
}
