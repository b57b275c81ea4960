//! Notification preferences value objects

use serde::{Deserialize, Serialize};

/// One entry of the preference batch.
///
/// `kind` stays a raw token so an unrecognized entry is reported when it is
/// dispatched instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreference {
    pub kind: String,
    pub destination: String,
    pub message: String,
}

impl NotificationPreference {
    pub fn new(
        kind: impl Into<String>,
        destination: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            destination: destination.into(),
            message: message.into(),
        }
    }
}

/// Contents of the preferences file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub preferences: Vec<NotificationPreference>,
}

impl PreferencesConfig {
    /// Built-in preference batch used when no file exists
    pub fn defaults() -> Self {
        Self {
            preferences: vec![
                NotificationPreference::new("email", "admin@example.com", "System Alert via Email!"),
                NotificationPreference::new("sms", "+1987654321", "System Alert via SMS!"),
                NotificationPreference::new(
                    "push",
                    "device456",
                    "System Alert via Push Notification!",
                ),
            ],
        }
    }

    /// Create an empty config
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    /// Append a preference to the end of the batch
    pub fn push(&mut self, preference: NotificationPreference) {
        self.preferences.push(preference);
    }
}
