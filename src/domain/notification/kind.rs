//! Notification kind value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnknownNotificationTypeError;

/// All recognized notification kinds
pub const ALL_KINDS: &[NotificationKind] = &[
    NotificationKind::Email,
    NotificationKind::Sms,
    NotificationKind::Push,
];

/// Closed set of notification channels a factory can be selected for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Email,
    Sms,
    Push,
}

impl NotificationKind {
    /// Get the token used to select this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
        }
    }

    /// Get the label used in the sent-message line
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "SMS",
            Self::Push => "push notification",
        }
    }

    /// Comma-separated list of valid tokens, for error messages
    pub fn valid_tokens() -> String {
        ALL_KINDS
            .iter()
            .map(NotificationKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Tokens match exactly: no trimming, no case folding.
impl FromStr for NotificationKind {
    type Err = UnknownNotificationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "push" => Ok(Self::Push),
            _ => Err(UnknownNotificationTypeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
