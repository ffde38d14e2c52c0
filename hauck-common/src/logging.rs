//! Logging utilities for the calculator services.
//!
//! Provides structured JSON or pretty logging with trace IDs for request
//! tracking.
//!
//! # Noise Filtering
//!
//! Noisy library modules (hyper, h2, tower_http, ...) are held at `warn` so
//! that calculation logs stay readable at the configured level.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Default noisy modules that should be filtered to warn level.
pub const NOISY_MODULES: &[&str] = &[
    "hyper",
    "hyper_util",
    "h2",
    "tokio_util",
    "tower_http",
    "handlebars",
];

/// Build the filter directives for the given level and extra exclusions.
pub fn filter_directives(log_level: &str, excluded_targets: &[String]) -> String {
    let mut directives = String::from(log_level);

    for module in NOISY_MODULES {
        directives.push_str(&format!(",{}=warn", module));
    }

    for target in excluded_targets {
        directives.push_str(&format!(",{}=warn", target));
    }

    directives
}

/// Initialize logging to stdout.
///
/// # Arguments
///
/// * `log_level` - Base log level (trace, debug, info, warn, error)
/// * `log_format` - "json" for structured JSON, anything else for human-readable
/// * `excluded_targets` - Extra modules to hold at `warn`
///
/// `RUST_LOG` takes precedence over the computed directives when set.
pub fn init_logging(log_level: &str, log_format: &str, excluded_targets: &[String]) {
    init_logging_with_writer(log_level, log_format, excluded_targets, std::io::stdout);
}

/// Initialize logging with an explicit writer.
///
/// Command-line tools pass `std::io::stderr` so logs never mix with output.
pub fn init_logging_with_writer<W>(
    log_level: &str,
    log_format: &str,
    excluded_targets: &[String],
    writer: W,
) where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(log_level, excluded_targets)));

    let subscriber = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(true)
            .with_target(true)
            .with_file(false)
            .with_line_number(false);
        let _ = subscriber.with(fmt_layer).try_init();
    }

    tracing::info!(
        log_level = %log_level,
        log_format = %log_format,
        noise_filtered = NOISY_MODULES.len() + excluded_targets.len(),
        "Logging initialized"
    );
}

/// Initialize logging from an observability config section.
pub fn init_from_config(config: &ObservabilityConfig) {
    init_logging(
        &config.log_level,
        &config.log_format,
        &config.excluded_targets,
    );
}

/// Generate a new trace ID for request tracing.
pub fn generate_trace_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Read the inbound `X-Trace-Id` header, or mint a new ID.
pub fn trace_id_from_headers(headers: &http::HeaderMap) -> String {
    headers
        .get("X-Trace-Id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(generate_trace_id)
}

/// Create a tracing span for a request with business context.
///
/// # Example
///
/// ```ignore
/// let span = request_span!("http_request", trace_id, method = %method, path = %path);
/// ```
#[macro_export]
macro_rules! request_span {
    ($name:expr, $trace_id:expr) => {
        tracing::info_span!($name, trace_id = %$trace_id)
    };
    ($name:expr, $trace_id:expr, $($field:tt)*) => {
        tracing::info_span!($name, trace_id = %$trace_id, $($field)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noisy_modules_list() {
        assert!(NOISY_MODULES.contains(&"hyper"));
        assert!(NOISY_MODULES.contains(&"h2"));
        assert!(NOISY_MODULES.contains(&"tower_http"));
    }

    #[test]
    fn test_filter_directives() {
        let directives = filter_directives("debug", &["my_crate".to_string()]);
        assert!(directives.starts_with("debug,"));
        assert!(directives.contains("hyper=warn"));
        assert!(directives.ends_with("my_crate=warn"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_generate_trace_id() {
        let id1 = generate_trace_id();
        let id2 = generate_trace_id();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format
    }

    #[test]
    fn test_trace_id_from_headers() {
        let mut headers = http::HeaderMap::new();
        assert_eq!(trace_id_from_headers(&headers).len(), 36);

        headers.insert("X-Trace-Id", "abc-123".parse().unwrap());
        assert_eq!(trace_id_from_headers(&headers), "abc-123");
    }
}
