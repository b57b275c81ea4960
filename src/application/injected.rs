//! Notification service with a constructor-injected notifier

use super::ports::{NotificationError, Notifier};

/// Service that receives its notifier at construction time and delegates
/// every `notify` to it.
pub struct InjectedNotificationService<N>
where
    N: Notifier,
{
    notifier: N,
}

impl<N> InjectedNotificationService<N>
where
    N: Notifier,
{
    /// Create a new service around the given notifier
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Borrow the injected notifier
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Send a message through the injected notifier.
    ///
    /// The notifier's error is returned unchanged.
    pub fn notify(&self, message: &str) -> Result<(), NotificationError> {
        self.notifier.send(message)
    }
}
