//! Notifier Patterns CLI entry point

use std::process::ExitCode;

use clap::Parser;

use notifier_patterns::cli::{
    args::{Cli, Commands, InjectedOptions, SendOptions},
    config_cmd::handle_config_command,
    load_preferences, run_factory_example, run_injected_example, run_send,
    Presenter, EXIT_ERROR, EXIT_SUCCESS,
};
use notifier_patterns::infrastructure::{stdout_sink, XdgPreferencesStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    let store = match cli.preferences {
        Some(path) => XdgPreferencesStore::with_path(path),
        None => XdgPreferencesStore::new(),
    };

    let status = match cli.command {
        Some(Commands::Config { action }) => {
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    EXIT_ERROR
                }
            }
        }
        Some(Commands::Injected { recipient, message }) => {
            let options = InjectedOptions { recipient, message };
            run_injected_example(&options, stdout_sink(), &presenter)
        }
        Some(Commands::Factory) => {
            let preferences = load_preferences(&store, &presenter).await;
            run_factory_example(&preferences, stdout_sink(), &presenter)
        }
        Some(Commands::Send {
            kind,
            destination,
            message,
        }) => {
            let options = SendOptions {
                kind,
                destination,
                message,
            };
            run_send(&options, stdout_sink(), &presenter)
        }
        None => {
            // Both examples, injected first
            let injected =
                run_injected_example(&InjectedOptions::default(), stdout_sink(), &presenter);
            let preferences = load_preferences(&store, &presenter).await;
            let factory = run_factory_example(&preferences, stdout_sink(), &presenter);
            injected.max(factory)
        }
    };

    ExitCode::from(status)
}
