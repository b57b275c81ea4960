//! Config command handler

use crate::application::ports::PreferencesStore;
use crate::domain::config::{NotificationPreference, PreferencesConfig};
use crate::domain::error::ConfigError;
use crate::domain::NotificationKind;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: PreferencesStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
        ConfigAction::Add {
            kind,
            destination,
            message,
        } => handle_add(store, presenter, kind, destination, message).await,
        ConfigAction::Reset => handle_reset(store, presenter).await,
    }
}

async fn handle_init<S: PreferencesStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Preferences file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_list<S: PreferencesStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    let config = store.load().await?;

    if !store.exists() {
        presenter.info("No preferences file; showing defaults");
    }

    if config.is_empty() {
        presenter.info("(no preferences)");
        return Ok(());
    }

    for (index, preference) in config.preferences.iter().enumerate() {
        presenter.preference(index, preference);
    }

    Ok(())
}

fn handle_path<S: PreferencesStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Appends to the stored batch; with no file yet, that is the defaults.
async fn handle_add<S: PreferencesStore>(
    store: &S,
    presenter: &Presenter,
    kind: String,
    destination: String,
    message: String,
) -> Result<(), ConfigError> {
    validate_kind(&kind)?;

    let mut config = store.load().await?;
    config.push(NotificationPreference::new(kind, destination, message));
    store.save(&config).await?;

    presenter.success(&format!(
        "Added preference #{} to {}",
        config.preferences.len(),
        store.path().display()
    ));
    Ok(())
}

async fn handle_reset<S: PreferencesStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    store.save(&PreferencesConfig::defaults()).await?;
    presenter.success("Preferences reset to defaults");
    Ok(())
}

/// Validate a kind token before it is stored
fn validate_kind(kind: &str) -> Result<(), ConfigError> {
    kind.parse::<NotificationKind>()
        .map(|_| ())
        .map_err(|e| ConfigError::ValidationError {
            key: "kind".to_string(),
            message: format!("{}. Valid kinds: {}", e, NotificationKind::valid_tokens()),
        })
}
