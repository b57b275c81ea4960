//! Application layer - Use cases and port interfaces
//!
//! Contains the notification services and the trait definitions
//! for everything they collaborate with.

pub mod dispatch;
pub mod factory_method;
pub mod injected;
pub mod ports;

// Re-export use cases
pub use dispatch::{DispatchOutcome, DispatchOutput, PreferenceDispatchUseCase};
pub use factory_method::FactoryNotificationService;
pub use injected::InjectedNotificationService;
