//! Logging and tracing infrastructure for fileinfo.
//!
//! The model itself only emits events; installing a subscriber is left to the
//! binary driving the introspection run. These helpers cover the two output
//! styles the rest of the toolchain uses.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize the global tracing subscriber.
///
/// This should be called once at program startup.
/// Subsequent calls are ignored.
pub fn init_tracing() {
    init_with(false, "info");
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    init_with(true, "info");
}

/// Initialize tracing from the `logging` section of a [`crate::config::FileInfoConfig`].
pub fn init_from_config(config: &LoggingConfig) {
    init_with(config.json, &config.default_filter);
}

fn init_with(json: bool, default_filter: &str) {
    INIT.call_once(|| {
        let filter = env_filter(default_filter);
        let registry = tracing_subscriber::registry().with(filter);

        // try_init: a host application may already own the global subscriber
        if json {
            let layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_current_span(true);
            if registry.with(layer).try_init().is_ok() {
                info!("fileinfo tracing initialized (JSON mode)");
            }
        } else {
            let layer = fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            if registry.with(layer).try_init().is_ok() {
                info!("fileinfo tracing initialized");
            }
        }
    });
}

/// Macro for creating spans around one analyzer's population step
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Macro for logging and returning errors
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        tracing::error!(error = %e, "Operation failed");
        e
    }};
    ($err:expr, $msg:expr) => {{
        let e = $err;
        tracing::error!(error = %e, message = $msg, "Operation failed");
        e
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_init_tracing_once() {
        // Should be callable multiple times without panic
        init_tracing();
        init_tracing();
        init_tracing_json();
    }

    #[test]
    fn test_init_from_config() {
        init_from_config(&LoggingConfig::default());
        debug!(tables = 3, "populating symbol tables");
    }

    #[test]
    fn test_span_creation() {
        init_tracing();
        let span = span_trace!("analyzer", name = "imports");
        let _guard = span.enter();
        warn!("inside analyzer span");
    }

    #[test]
    fn test_log_error_returns_value() {
        init_tracing();
        let err = log_error!(crate::error::FileInfoError::InvalidInput("boom".into()));
        assert_eq!(err.to_string(), "Invalid input: boom");
    }
}
