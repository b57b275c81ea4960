//! Notifier factory port interface

use crate::domain::error::UnknownNotificationTypeError;

use super::notifier::Notifier;

/// Port for constructing notifiers.
///
/// Every call yields a fresh notifier; implementations do not cache.
pub trait NotificationFactory: Send + Sync {
    fn create_notifier(&self) -> Box<dyn Notifier>;
}

/// Blanket implementation for boxed factory types
impl NotificationFactory for Box<dyn NotificationFactory> {
    fn create_notifier(&self) -> Box<dyn Notifier> {
        self.as_ref().create_notifier()
    }
}

/// Port for the type-keyed factory lookup
pub trait FactorySelector: Send + Sync {
    /// Map a kind token and destination to a factory for that kind.
    ///
    /// # Returns
    /// The factory, or the offending token if the kind is not recognized
    fn select(
        &self,
        kind: &str,
        destination: &str,
    ) -> Result<Box<dyn NotificationFactory>, UnknownNotificationTypeError>;
}
