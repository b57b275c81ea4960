//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default recipient for the injected-notifier example
pub const DEFAULT_RECIPIENT: &str = "acetina@example.com";

/// Default message for the injected-notifier example
pub const DEFAULT_MESSAGE: &str = "Hello!";

/// Notifier Patterns - dependency injection and factory method examples
#[derive(Parser, Debug)]
#[command(name = "notifier-patterns")]
#[command(version)]
#[command(about = "Dependency injection and factory method examples built around a toy notifier")]
#[command(long_about = None)]
pub struct Cli {
    /// Preferences file (defaults to the XDG config location)
    #[arg(
        short = 'p',
        long,
        value_name = "PATH",
        global = true,
        env = "NOTIFIER_PATTERNS_PREFERENCES"
    )]
    pub preferences: Option<PathBuf>,

    /// Example to run (both examples run when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the injected-notifier example
    Injected {
        /// Email recipient handed to the notifier
        #[arg(long, default_value = DEFAULT_RECIPIENT)]
        recipient: String,
        /// Message to send
        #[arg(long, default_value = DEFAULT_MESSAGE)]
        message: String,
    },
    /// Run the factory-method example, then the preference batch
    Factory,
    /// Send one message through a factory selected by kind
    Send {
        /// Notification kind (email, sms, push)
        kind: String,
        /// Recipient, phone number, or device id
        destination: String,
        /// Message to send
        message: String,
    },
    /// Manage the preferences file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create preferences file with defaults
    Init,
    /// List the preference batch
    List,
    /// Show preferences file path
    Path,
    /// Append a preference to the batch
    Add {
        /// Notification kind (email, sms, push)
        kind: String,
        /// Recipient, phone number, or device id
        destination: String,
        /// Message to send
        message: String,
    },
    /// Overwrite the preferences file with defaults
    Reset,
}

/// Parsed injected-notifier options
#[derive(Debug, Clone)]
pub struct InjectedOptions {
    pub recipient: String,
    pub message: String,
}

impl Default for InjectedOptions {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// Parsed send options
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub kind: String,
    pub destination: String,
    pub message: String,
}
