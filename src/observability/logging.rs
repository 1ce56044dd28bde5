//! Structured logging initialization.
//!
//! `RUST_LOG` takes precedence; the configured level is the fallback so a
//! bare deployment still logs at the intended level.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Call once, before serving.
pub fn init_tracing(fallback_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "api_gateway={fallback_level},tower_http=warn"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
