//! Diagnostic logging for the CLI.
//!
//! Log lines go to stderr so they never mix with the table drawn on stdout.
//! `RUST_LOG` picks the level; without it only warnings are shown.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging() {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .finish();

        // Another subscriber may already be installed by an embedding program.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use headsup_engine::engine::Engine;
    use headsup_engine::player::{PlayerAction, Seat};
    use tracing::Level;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    #[derive(Debug, Clone)]
    struct LogEntry {
        level: Level,
        message: String,
        fields: Vec<(String, String)>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl Visit for FieldVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            let value = format!("{:?}", value);
            if field.name() == "message" {
                self.message = Some(value);
            } else {
                self.fields.push((field.name().to_string(), value));
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.entries.lock().unwrap().push(LogEntry {
                level: *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                fields: visitor.fields,
            });
        }
    }

    #[test]
    fn engine_events_carry_structured_fields() {
        let layer = CaptureLayer::default();
        let registry = Registry::default().with(layer.clone());

        tracing::subscriber::with_default(registry, || {
            let mut engine = Engine::new(Some(5), 1000);
            let mut hand = engine.start_hand().unwrap();
            assert!(hand.submit_action(Seat::Opponent, PlayerAction::Check).is_err());
            let view = hand.submit_action(Seat::Human, PlayerAction::Fold).unwrap();
            engine.settle(view.outcome.as_ref().unwrap()).unwrap();
        });

        let entries = layer.entries.lock().unwrap().clone();
        let rejected = entries
            .iter()
            .find(|e| e.level == Level::WARN)
            .expect("rejection is logged");
        assert!(rejected.message.contains("action rejected"));
        assert!(rejected.fields.iter().any(|(k, v)| k == "seat" && v == "opponent"));

        let infos: Vec<&str> = entries
            .iter()
            .filter(|e| e.level == Level::INFO)
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(infos, ["hand started", "hand finished", "stacks settled"]);
    }

    #[test]
    fn init_is_idempotent() {
        super::init_logging();
        super::init_logging();
    }
}
