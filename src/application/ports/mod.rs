//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod factory;
pub mod notifier;
pub mod sink;

// Re-export common types
pub use config::PreferencesStore;
pub use factory::{FactorySelector, NotificationFactory};
pub use notifier::{NotificationError, Notifier};
pub use sink::{MessageSink, SharedSink};
