//! Logging setup utilities for the Ancient Bowling binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive applied when `RUST_LOG` is not set.
///
/// Crate names are normalized the way tracing reports targets (`-` becomes `_`).
pub fn default_directive(targets: &[&str], default_log_level: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The level applies to every crate listed in `targets`. It can be overridden
/// using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `targets` - Crate or binary names whose logs should be shown (e.g., "ancient-bowling-client")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use ancient_bowling_shared::logger::setup_logger;
///
/// setup_logger(&["ancient-bowling-client"], "info");
/// ```
pub fn setup_logger(targets: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(targets, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
