//! Notifier Patterns - dependency injection and factory method examples
//!
//! A toy notification model used to show two ways of wiring a service to
//! its collaborator: handing it a ready-made notifier, or handing it a
//! factory that builds a fresh notifier for every call.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification kind token, preference value objects, and errors
//! - **Application**: Notification services, batch dispatch, and port traits
//! - **Infrastructure**: Email/SMS/push notifiers and factories, sinks, preferences file
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
