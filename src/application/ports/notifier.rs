//! Notification port interface

use thiserror::Error;

/// Notification errors
///
/// None of the bundled notifiers produce these; a notifier backed by a real
/// transport reports its delivery failures here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Failed to send notification: {0}")]
    SendFailed(String),
}

/// Port for delivering a message to a single fixed destination
pub trait Notifier: Send + Sync {
    /// Deliver a message.
    ///
    /// # Arguments
    /// * `message` - The notification body
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    fn send(&self, message: &str) -> Result<(), NotificationError>;

    /// The destination this notifier delivers to
    fn destination(&self) -> &str;
}

/// Blanket implementation for boxed notifier types
impl Notifier for Box<dyn Notifier> {
    fn send(&self, message: &str) -> Result<(), NotificationError> {
        self.as_ref().send(message)
    }

    fn destination(&self) -> &str {
        self.as_ref().destination()
    }
}
