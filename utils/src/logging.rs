//! Structured logging initialisation via `tracing`.
//!
//! Two output formats are supported:
//! - [`LogFormat::Human`]: readable lines for development.
//! - [`LogFormat::Json`]: newline-delimited JSON for log aggregation.
//!
//! The filter can be overridden at runtime via `RUST_LOG`. When it is not set,
//! the caller-supplied `level` string is used (e.g. `"info"` or
//! `"warn,quill_wallet_core=debug"`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl LogFormat {
    /// Parse `"human"` or `"json"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialise the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging(format: LogFormat, level: &str) {
    match format {
        LogFormat::Human => {
            tracing_subscriber::registry()
                .with(filter(level))
                .with(fmt::layer().with_target(true))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter(level))
                .with(fmt::layer().json().with_target(true))
                .init();
        }
    }
    tracing::debug!(?format, "logging initialised");
}

/// Install a subscriber that writes through the test harness's captured output.
///
/// Safe to call from every test: only the first call in a process installs
/// anything, later calls return `false`.
pub fn try_init_test_logging() -> bool {
    tracing_subscriber::registry()
        .with(filter("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(LogFormat::from_name("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name("human"), Some(LogFormat::Human));
        assert_eq!(LogFormat::from_name("xml"), None);
    }

    #[test]
    fn test_logging_installs_once() {
        try_init_test_logging();
        assert!(!try_init_test_logging());
    }
}
