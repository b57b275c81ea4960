//! Preferences configuration module

mod preferences;

pub use preferences::{NotificationPreference, PreferencesConfig};
