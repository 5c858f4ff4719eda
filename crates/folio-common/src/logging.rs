//! Structured logging infrastructure for Folio

use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{FolioError, FolioResult};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "folio_i18n=trace")
    pub level: String,
    /// Whether to use the compact single-line format
    pub compact_format: bool,
    /// Whether to use the multi-line pretty format
    pub pretty_format: bool,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include timestamps; the browser has no wall clock for the fmt timer
    pub include_timestamps: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact_format: false,
            pretty_format: true,
            include_spans: false,
            include_timestamps: true,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Settings suited to the browser console.
    pub fn browser(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            compact_format: true,
            pretty_format: false,
            include_spans: false,
            include_timestamps: false,
            include_targets: true,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the tracing subscriber writing through `writer`.
pub fn init_logging_with_writer<W>(config: &LoggingConfig, writer: W, ansi: bool) -> FolioResult<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let span_events = config.span_events();

    let result = match (config.compact_format, config.include_timestamps) {
        (true, true) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(ansi)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        (true, false) => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_ansi(ansi)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        (false, true) if config.pretty_format => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(ansi)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        (false, true) => registry
            .with(
                fmt::layer()
                    .with_ansi(ansi)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        (false, false) => registry
            .with(
                fmt::layer()
                    .without_time()
                    .with_ansi(ansi)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| FolioError::config(format!("Failed to install log subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.compact_format);
        assert!(config.pretty_format);
        assert!(config.include_timestamps);
        assert!(config.include_targets);
    }

    #[test]
    fn test_browser_config_has_no_timer() {
        let config = LoggingConfig::browser("debug");
        assert_eq!(config.level, "debug");
        assert!(config.compact_format);
        assert!(!config.include_timestamps);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: "not a [valid filter".to_string(),
            ..LoggingConfig::default()
        };
        // Should not panic
        let _filter = config.env_filter();
    }

    #[test]
    fn test_second_install_is_config_error() {
        let config = LoggingConfig::browser("warn");
        let _ = init_logging_with_writer(&config, std::io::sink, false);

        let second = init_logging_with_writer(&config, std::io::sink, false);
        assert!(matches!(second, Err(FolioError::Config { .. })));
    }
}
