//! Kind-keyed notification factory selection

use std::sync::Arc;

use crate::application::ports::{FactorySelector, NotificationFactory, SharedSink};
use crate::domain::error::UnknownNotificationTypeError;
use crate::domain::NotificationKind;
use crate::infrastructure::sink::stdout_sink;

use super::email::EmailFactory;
use super::push::PushFactory;
use super::sms::SmsFactory;

/// Build the factory for a parsed kind
pub fn create_factory(
    kind: NotificationKind,
    destination: impl Into<String>,
    sink: SharedSink,
) -> Box<dyn NotificationFactory> {
    match kind {
        NotificationKind::Email => Box::new(EmailFactory::with_sink(destination, sink)),
        NotificationKind::Sms => Box::new(SmsFactory::with_sink(destination, sink)),
        NotificationKind::Push => Box::new(PushFactory::with_sink(destination, sink)),
    }
}

/// Select a factory by kind token; produced notifiers write to standard output.
///
/// Tokens are `email`, `sms` and `push`, matched exactly.
pub fn select_factory(
    kind: &str,
    destination: &str,
) -> Result<Box<dyn NotificationFactory>, UnknownNotificationTypeError> {
    select_factory_with_sink(kind, destination, stdout_sink())
}

/// Select a factory by kind token, handing `sink` to every produced notifier
pub fn select_factory_with_sink(
    kind: &str,
    destination: &str,
    sink: SharedSink,
) -> Result<Box<dyn NotificationFactory>, UnknownNotificationTypeError> {
    let kind: NotificationKind = kind.parse()?;
    Ok(create_factory(kind, destination, sink))
}

/// [`FactorySelector`] over the bundled email, SMS and push factories
pub struct KindFactorySelector {
    sink: SharedSink,
}

impl KindFactorySelector {
    pub fn new() -> Self {
        Self::with_sink(stdout_sink())
    }

    pub fn with_sink(sink: SharedSink) -> Self {
        Self { sink }
    }
}

impl Default for KindFactorySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactorySelector for KindFactorySelector {
    fn select(
        &self,
        kind: &str,
        destination: &str,
    ) -> Result<Box<dyn NotificationFactory>, UnknownNotificationTypeError> {
        select_factory_with_sink(kind, destination, Arc::clone(&self.sink))
    }
}
