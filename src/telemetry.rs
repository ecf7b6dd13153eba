//! Tracing subscriber setup for binaries and examples.

use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber: env-filtered fmt output plus
/// an [`ErrorLayer`] for span traces on errors.
///
/// Honors `RUST_LOG`; defaults to `info` globally with `debug` for this
/// crate. Safe to call more than once — later calls are no-ops.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,genstack=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()
        .ok();
}
