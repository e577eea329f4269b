use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global fmt subscriber. Logs go to stderr so stdout stays the
/// game transcript. Calling it twice is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use fivedraw_engine::cards::Card;
    use fivedraw_engine::config::TableConfig;
    use fivedraw_engine::deck::CardSource;
    use fivedraw_engine::errors::CardSourceError;
    use fivedraw_engine::table::{SeatSpec, Table};
    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    #[derive(Debug, Clone)]
    struct LogEntry {
        level: Level,
        message: String,
    }

    #[derive(Clone, Default)]
    struct Capture {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl<S: tracing::Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.entries.lock().unwrap().push(LogEntry {
                level: *event.metadata().level(),
                message: visitor.message,
            });
        }
    }

    #[derive(Default)]
    struct MessageVisitor {
        message: String,
    }

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.message = format!("{:?}", value);
            }
        }
    }

    /// Fails the first draw, then deals from a fixed list.
    struct FlakySource {
        failed: bool,
        cards: Vec<Card>,
    }

    impl CardSource for FlakySource {
        fn draw(&mut self, n: usize) -> Result<Vec<Card>, CardSourceError> {
            if !self.failed {
                self.failed = true;
                return Err(CardSourceError::Unavailable("timeout".into()));
            }
            Ok(self.cards.drain(..n).collect())
        }
        fn reshuffle(&mut self) -> Result<(), CardSourceError> {
            Ok(())
        }
        fn muck(&mut self, _cards: &[Card]) {}
        fn new_round(&mut self) -> Result<(), CardSourceError> {
            Ok(())
        }
    }

    #[test]
    fn test_engine_logs_round_start_and_retry() {
        let capture = Capture::default();
        let registry = Registry::default().with(capture.clone());
        let cards = fivedraw_engine::cards::full_deck();
        let source = FlakySource {
            failed: false,
            cards,
        };

        tracing::subscriber::with_default(registry, || {
            let seats = vec![SeatSpec::human("YOU"), SeatSpec::cpu("Tex")];
            let mut table = Table::new(TableConfig::default(), seats, Box::new(source)).unwrap();
            table.start_round().unwrap();
        });

        let entries = capture.entries.lock().unwrap().clone();
        assert!(entries
            .iter()
            .any(|e| e.level == Level::WARN && e.message.contains("reshuffling")));
        assert!(entries
            .iter()
            .any(|e| e.level == Level::INFO && e.message.contains("round started")));
    }
}
