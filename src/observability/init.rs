//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name reported in every trace.
const SERVICE_NAME: &str = "vitrine";

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "vitrine-otlp.json";

/// Installs the global subscriber: `EnvFilter` plus an OpenTelemetry layer
/// exporting to `<data_dir>/vitrine-otlp.json`.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level`
///
/// # Initialization Behavior
///
/// Tracing is optional: if the data directory cannot be created the function
/// returns without installing anything. Only the first call in a process takes
/// effect.
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.trace_level));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = config.data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file, resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry().with(filter).with(otel_layer).try_init();
}
