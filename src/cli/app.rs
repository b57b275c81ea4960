//! Runners for the example flows

use std::sync::Arc;

use crate::application::ports::{NotificationError, PreferencesStore, SharedSink};
use crate::application::{
    DispatchOutcome, FactoryNotificationService, InjectedNotificationService,
    PreferenceDispatchUseCase,
};
use crate::domain::config::PreferencesConfig;
use crate::infrastructure::{
    select_factory_with_sink, EmailFactory, EmailNotifier, KindFactorySelector, PushFactory,
    SmsFactory,
};

use super::args::{InjectedOptions, SendOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the injected-notifier example, returning the exit status
pub fn run_injected_example(
    options: &InjectedOptions,
    sink: SharedSink,
    presenter: &Presenter,
) -> u8 {
    presenter.heading("Injected notifier");

    let email = EmailNotifier::with_sink(options.recipient.clone(), sink);
    let service = InjectedNotificationService::new(email);

    match service.notify(&options.message) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

/// Run the factory-method example followed by the preference batch.
///
/// Errors are reported and the run continues; the exit code is an error
/// only if some notifier failed to send.
pub fn run_factory_example(
    preferences: &PreferencesConfig,
    sink: SharedSink,
    presenter: &Presenter,
) -> u8 {
    presenter.heading("Factory method");

    let mut failed = false;

    let email_service = FactoryNotificationService::new(EmailFactory::with_sink(
        "usuario@example.com",
        Arc::clone(&sink),
    ));
    failed |= report(email_service.notify("Hello via Email!"), presenter);

    let sms_service = FactoryNotificationService::new(SmsFactory::with_sink(
        "+1234567890",
        Arc::clone(&sink),
    ));
    failed |= report(sms_service.notify("Hello via SMS!"), presenter);

    let push_service = FactoryNotificationService::new(PushFactory::with_sink(
        "device123",
        Arc::clone(&sink),
    ));
    failed |= report(push_service.notify("Hello via Push Notification!"), presenter);

    presenter.heading("Preferences");

    let use_case = PreferenceDispatchUseCase::new(KindFactorySelector::with_sink(sink));
    let output = use_case.execute(&preferences.preferences);

    for outcome in &output.outcomes {
        match outcome {
            DispatchOutcome::Sent { .. } => {}
            DispatchOutcome::Skipped(e) => presenter.warn(&format!("Skipping preference: {}", e)),
            DispatchOutcome::Failed { kind, error } => {
                presenter.error(&format!("{} preference failed: {}", kind, error));
            }
        }
    }

    if output.failed_count() > 0 {
        failed = true;
    }

    presenter.info(&format!(
        "{} sent, {} skipped, {} failed",
        output.sent_count(),
        output.skipped_count(),
        output.failed_count()
    ));

    if failed {
        EXIT_ERROR
    } else {
        EXIT_SUCCESS
    }
}

/// Send one message through a factory chosen by kind token
pub fn run_send(options: &SendOptions, sink: SharedSink, presenter: &Presenter) -> u8 {
    let factory = match select_factory_with_sink(&options.kind, &options.destination, sink) {
        Ok(factory) => factory,
        Err(e) => {
            presenter.error(&e.to_string());
            return EXIT_ERROR;
        }
    };

    let service = FactoryNotificationService::new(factory);
    match service.notify(&options.message) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

/// Load the preference batch, falling back to the defaults on error
pub async fn load_preferences<S: PreferencesStore>(
    store: &S,
    presenter: &Presenter,
) -> PreferencesConfig {
    match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("{}; using default preferences", e));
            PreferencesConfig::defaults()
        }
    }
}

/// Print a send error; returns whether there was one
fn report(result: Result<(), NotificationError>, presenter: &Presenter) -> bool {
    match result {
        Ok(()) => false,
        Err(e) => {
            presenter.error(&format!("Error: {}", e));
            true
        }
    }
}
