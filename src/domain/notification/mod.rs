//! Notification domain module

mod kind;

pub use kind::{NotificationKind, ALL_KINDS};
