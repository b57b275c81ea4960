//! Notification service that builds a notifier per call

use super::ports::{NotificationError, NotificationFactory};

/// Service that holds a factory and asks it for a fresh notifier on every
/// `notify`. The produced notifier is dropped after the send.
pub struct FactoryNotificationService<F>
where
    F: NotificationFactory,
{
    factory: F,
}

impl<F> FactoryNotificationService<F>
where
    F: NotificationFactory,
{
    /// Create a new service around the given factory
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Borrow the held factory
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Build a notifier and send a message through it.
    ///
    /// The notifier's error is returned unchanged.
    pub fn notify(&self, message: &str) -> Result<(), NotificationError> {
        let notifier = self.factory.create_notifier();
        notifier.send(message)
    }
}
