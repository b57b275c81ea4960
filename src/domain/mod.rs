//! Domain layer - Core types and errors
//!
//! Contains the notification kind token, the preference value objects,
//! and domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::{NotificationPreference, PreferencesConfig};
pub use error::*;
pub use notification::NotificationKind;
