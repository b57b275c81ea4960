//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the runners
//! for each example flow.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    load_preferences, run_factory_example, run_injected_example, run_send, EXIT_ERROR,
    EXIT_SUCCESS,
};
pub use args::{Cli, Commands, ConfigAction, InjectedOptions, SendOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
