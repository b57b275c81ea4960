//! Preference batch dispatch use case

use crate::domain::config::NotificationPreference;
use crate::domain::error::UnknownNotificationTypeError;

use super::factory_method::FactoryNotificationService;
use super::ports::{FactorySelector, NotificationError};

/// Result of dispatching a single preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The message was handed to a notifier
    Sent { kind: String, destination: String },
    /// The kind token was not recognized; nothing was sent
    Skipped(UnknownNotificationTypeError),
    /// The notifier reported a failure
    Failed {
        kind: String,
        error: NotificationError,
    },
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Output from the dispatch use case, one outcome per preference in input order
#[derive(Debug, Clone, Default)]
pub struct DispatchOutput {
    pub outcomes: Vec<DispatchOutcome>,
}

impl DispatchOutput {
    pub fn sent_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_sent()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DispatchOutcome::Skipped(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DispatchOutcome::Failed { .. }))
            .count()
    }
}

/// Walks a preference batch, selecting a factory per entry.
///
/// An unrecognized kind or a failed send is recorded and the walk continues.
pub struct PreferenceDispatchUseCase<S>
where
    S: FactorySelector,
{
    selector: S,
}

impl<S> PreferenceDispatchUseCase<S>
where
    S: FactorySelector,
{
    /// Create a new use case instance
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    /// Dispatch every preference in order
    pub fn execute(&self, preferences: &[NotificationPreference]) -> DispatchOutput {
        let outcomes = preferences
            .iter()
            .map(|preference| self.dispatch_one(preference))
            .collect();

        DispatchOutput { outcomes }
    }

    fn dispatch_one(&self, preference: &NotificationPreference) -> DispatchOutcome {
        let factory = match self
            .selector
            .select(&preference.kind, &preference.destination)
        {
            Ok(factory) => factory,
            Err(e) => return DispatchOutcome::Skipped(e),
        };

        let service = FactoryNotificationService::new(factory);
        match service.notify(&preference.message) {
            Ok(()) => DispatchOutcome::Sent {
                kind: preference.kind.clone(),
                destination: preference.destination.clone(),
            },
            Err(error) => DispatchOutcome::Failed {
                kind: preference.kind.clone(),
                error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NotificationFactory, Notifier};
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    struct LoggingNotifier {
        destination: String,
        log: Log,
        fail: bool,
    }

    impl Notifier for LoggingNotifier {
        fn send(&self, message: &str) -> Result<(), NotificationError> {
            if self.fail {
                return Err(NotificationError::SendFailed("rejected".to_string()));
            }
            self.log
                .lock()
                .unwrap()
                .push(format!("{} <- {}", self.destination, message));
            Ok(())
        }

        fn destination(&self) -> &str {
            &self.destination
        }
    }

    struct LoggingFactory {
        destination: String,
        log: Log,
        fail: bool,
    }

    impl NotificationFactory for LoggingFactory {
        fn create_notifier(&self) -> Box<dyn Notifier> {
            Box::new(LoggingNotifier {
                destination: self.destination.clone(),
                log: Arc::clone(&self.log),
                fail: self.fail,
            })
        }
    }

    // Knows "ok" and "broken"; everything else is unknown
    struct StubSelector {
        log: Log,
    }

    impl FactorySelector for StubSelector {
        fn select(
            &self,
            kind: &str,
            destination: &str,
        ) -> Result<Box<dyn NotificationFactory>, UnknownNotificationTypeError> {
            match kind {
                "ok" | "broken" => Ok(Box::new(LoggingFactory {
                    destination: destination.to_string(),
                    log: Arc::clone(&self.log),
                    fail: kind == "broken",
                })),
                _ => Err(UnknownNotificationTypeError {
                    input: kind.to_string(),
                }),
            }
        }
    }

    fn use_case() -> (PreferenceDispatchUseCase<StubSelector>, Log) {
        let log: Log = Arc::default();
        let selector = StubSelector {
            log: Arc::clone(&log),
        };
        (PreferenceDispatchUseCase::new(selector), log)
    }

    #[test]
    fn sends_every_recognized_preference_in_order() {
        let (use_case, log) = use_case();
        let preferences = vec![
            NotificationPreference::new("ok", "a", "first"),
            NotificationPreference::new("ok", "b", "second"),
        ];

        let output = use_case.execute(&preferences);

        assert_eq!(output.sent_count(), 2);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["a <- first".to_string(), "b <- second".to_string()]
        );
    }

    #[test]
    fn unknown_kind_is_skipped_and_walk_continues() {
        let (use_case, log) = use_case();
        let preferences = vec![
            NotificationPreference::new("carrier-pigeon", "loft", "coo"),
            NotificationPreference::new("ok", "b", "after"),
        ];

        let output = use_case.execute(&preferences);

        assert_eq!(
            output.outcomes[0],
            DispatchOutcome::Skipped(UnknownNotificationTypeError {
                input: "carrier-pigeon".to_string()
            })
        );
        assert!(output.outcomes[1].is_sent());
        assert_eq!(output.skipped_count(), 1);
        assert_eq!(*log.lock().unwrap(), vec!["b <- after".to_string()]);
    }

    #[test]
    fn failed_send_is_recorded() {
        let (use_case, _log) = use_case();
        let preferences = vec![NotificationPreference::new("broken", "x", "msg")];

        let output = use_case.execute(&preferences);

        assert_eq!(output.failed_count(), 1);
        assert!(matches!(
            &output.outcomes[0],
            DispatchOutcome::Failed { kind, .. } if kind == "broken"
        ));
    }

    #[test]
    fn empty_batch_yields_no_outcomes() {
        let (use_case, _log) = use_case();
        let output = use_case.execute(&[]);
        assert!(output.outcomes.is_empty());
    }
}
