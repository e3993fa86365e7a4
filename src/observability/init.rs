//! Tracing subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter;
use crate::Config;

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "flocus-otlp.json";

/// Filter used when `trace_level` is not configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Service name recorded on every span.
const SERVICE_NAME: &str = "flocus";

/// Installs the global subscriber: `EnvFilter` from `trace_level`, then an
/// OpenTelemetry layer exporting to `<data dir>/flocus-otlp.json`.
///
/// Best-effort: if the data directory cannot be created, or a subscriber is
/// already installed, the call does nothing.
///
/// ```rust,no_run
/// use flocus::observability::init_tracing;
/// use flocus::Config;
///
/// init_tracing(&Config { trace_level: Some("debug".to_string()), ..Config::default() });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
