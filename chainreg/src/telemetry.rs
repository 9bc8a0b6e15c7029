//! Console tracing setup.
//!
//! Provides [`init_tracing`] wiring a `tracing-subscriber` fmt layer behind
//! an [`EnvFilter`]. Only available with the `telemetry` feature.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes console logging.
///
/// `RUST_LOG` takes precedence; `fallback` is any valid [`EnvFilter`]
/// directive string (e.g. `"info"`, `"chainreg=debug"`) used when it is
/// unset.
pub fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
