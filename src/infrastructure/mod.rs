//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the bundled
//! notifiers and their factories, output sinks, and the preferences file.

pub mod config;
pub mod notification;
pub mod sink;

// Re-export adapters
pub use config::XdgPreferencesStore;
pub use notification::{
    create_factory, select_factory, select_factory_with_sink, EmailFactory, EmailNotifier,
    KindFactorySelector, PushFactory, PushNotifier, SmsFactory, SmsNotifier,
};
pub use sink::{stdout_sink, MemorySink, StdoutSink};
