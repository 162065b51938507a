//! Integration tests for tracing initialization and span helpers.

use primebench::error::Error;
use primebench::telemetry::trial::{record_trial_finished, start_trial_span};
use primebench::telemetry::{TelemetryConfig, init_telemetry};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt as _};

/// Collects `name=value` pairs for every span field set or recorded.
#[derive(Clone, Default)]
struct FieldCapture(Arc<Mutex<Vec<String>>>);

impl FieldCapture {
    fn fields(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Visit for FieldCapture {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0
            .lock()
            .unwrap()
            .push(format!("{}={:?}", field.name(), value));
    }
}

impl<S: tracing::Subscriber> Layer<S> for FieldCapture {
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        attrs.record(&mut self.clone());
    }

    fn on_record(&self, _id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        values.record(&mut self.clone());
    }
}

#[test]
fn telemetry_initializes_with_default_filter() {
    // A global subscriber can only be set once per process, so a second
    // init reports Other rather than panicking.
    let first = init_telemetry(TelemetryConfig {
        default_filter: "primebench=debug".to_string(),
    });
    assert!(matches!(first, Ok(()) | Err(Error::Other(_))));

    let second = init_telemetry(TelemetryConfig {
        default_filter: "primebench=debug".to_string(),
    });
    assert!(matches!(second, Err(Error::Other(_))));
}

#[test]
fn trial_span_records_range_and_outcome() {
    let capture = FieldCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let span = start_trial_span(4, 3, 1000);
        assert!(!span.is_disabled());
        record_trial_finished(&span, 42, 167);
    });

    let fields = capture.fields();
    for expected in [
        "trial.workers=4",
        "trial.range.start=3",
        "trial.range.end=1000",
        "trial.elapsed_ms=42",
        "trial.primes=167",
    ] {
        assert!(
            fields.iter().any(|f| f == expected),
            "missing {expected} in {fields:?}"
        );
    }
}
