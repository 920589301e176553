//! Log subscriber setup.
//!
//! Provides [`Telemetry`] for installing a `tracing` subscriber that writes
//! to stderr, leaving stdout to command output. Only available with the
//! `telemetry` feature.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log subscriber configuration.
#[derive(Debug, Default)]
pub struct Telemetry {
    log_level: Option<String>,
}

impl Telemetry {
    /// Creates a new, empty [`Telemetry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level filter used when `RUST_LOG` is not set.
    ///
    /// Accepts any valid [`EnvFilter`] directive string (e.g. `"debug"`,
    /// `"injected_wallet=trace"`).
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Installs the global subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level, which falls
    /// back to `info`.
    pub fn register(self) {
        let fallback = self.log_level.as_deref().unwrap_or("info");
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        tracing::debug!("log subscriber registered");
    }
}
